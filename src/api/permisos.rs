//! Handlers de permisos por ruta
//!
//! CRUD de filas de permiso y el endpoint de verificación que usan las
//! páginas para decidir acceso.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use validator::Validate;

use crate::dto::ApiResponse;
use crate::models::permiso::{
    CreatePermisoRequest, Permiso, UpdatePermisoRequest, VerificarPermisoRequest,
    VerificarPermisoResponse,
};
use crate::services::permisos_service::PermisosService;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_permiso))
        .route("/usuario/:usuario_id", get(get_permisos_de_usuario))
        .route("/verificar", post(verificar_permiso))
        .route("/:id", axum::routing::put(update_permiso).delete(delete_permiso))
}

async fn get_permisos_de_usuario(
    State(state): State<AppState>,
    Path(usuario_id): Path<i32>,
) -> AppResult<Json<Vec<Permiso>>> {
    let permisos =
        sqlx::query_as::<_, Permiso>("SELECT * FROM permisos WHERE usuario_id = $1 ORDER BY ruta")
            .bind(usuario_id)
            .fetch_all(&state.pool)
            .await?;

    Ok(Json(permisos))
}

// Alta idempotente por (usuario, ruta): si la fila existe se actualiza el flag.
async fn create_permiso(
    State(state): State<AppState>,
    Json(request): Json<CreatePermisoRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Permiso>>)> {
    request.validate()?;

    let permiso = sqlx::query_as::<_, Permiso>(
        r#"
        INSERT INTO permisos (usuario_id, ruta, permitido)
        VALUES ($1, $2, $3)
        ON CONFLICT (usuario_id, ruta) DO UPDATE SET permitido = EXCLUDED.permitido
        RETURNING *
        "#,
    )
    .bind(request.usuario_id)
    .bind(request.ruta)
    .bind(request.permitido)
    .fetch_one(&state.pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Permiso guardado exitosamente", permiso)),
    ))
}

async fn update_permiso(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdatePermisoRequest>,
) -> AppResult<Json<ApiResponse<Permiso>>> {
    request.validate()?;

    let permiso = sqlx::query_as::<_, Permiso>(
        "UPDATE permisos SET permitido = $2 WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(request.permitido)
    .fetch_optional(&state.pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Permiso no encontrado".to_string()))?;

    Ok(Json(ApiResponse::new(
        "Permiso actualizado exitosamente",
        permiso,
    )))
}

async fn delete_permiso(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM permisos WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Permiso no encontrado".to_string()));
    }

    Ok(Json(json!({
        "message": "Permiso eliminado exitosamente",
        "data": null
    })))
}

/// Evaluar si un usuario puede acceder a una ruta solicitada
async fn verificar_permiso(
    State(state): State<AppState>,
    Json(request): Json<VerificarPermisoRequest>,
) -> AppResult<Json<VerificarPermisoResponse>> {
    request.validate()?;

    let service = PermisosService::new(state.pool.clone());
    let (permitido, ruta) = service.verificar(request.usuario_id, &request.ruta).await?;

    Ok(Json(VerificarPermisoResponse { permitido, ruta }))
}
