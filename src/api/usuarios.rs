//! Handlers de usuarios del back office

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use bcrypt::{hash, DEFAULT_COST};
use serde_json::json;
use validator::Validate;

use crate::dto::ApiResponse;
use crate::models::usuario::{CreateUsuarioRequest, Usuario, UsuarioResponse};
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_usuarios).post(create_usuario))
        .route("/:id", get(get_usuario).delete(delete_usuario))
}

async fn get_usuarios(State(state): State<AppState>) -> AppResult<Json<Vec<UsuarioResponse>>> {
    let usuarios = sqlx::query_as::<_, Usuario>(
        "SELECT * FROM usuarios WHERE activo = TRUE ORDER BY creado_en DESC",
    )
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(usuarios.into_iter().map(UsuarioResponse::from).collect()))
}

async fn create_usuario(
    State(state): State<AppState>,
    Json(request): Json<CreateUsuarioRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<UsuarioResponse>>)> {
    request.validate()?;

    let password_hash = hash(&request.password, DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("Error procesando credenciales: {}", e)))?;

    let usuario = sqlx::query_as::<_, Usuario>(
        r#"
        INSERT INTO usuarios (nombre, email, num_telefono, password_hash, es_admin)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(request.nombre)
    .bind(request.email)
    .bind(request.num_telefono)
    .bind(password_hash)
    .bind(request.es_admin)
    .fetch_one(&state.pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Usuario creado exitosamente",
            usuario.into(),
        )),
    ))
}

async fn get_usuario(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<UsuarioResponse>> {
    let usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

    Ok(Json(usuario.into()))
}

// Baja lógica: el usuario queda inactivo y sus sesiones dejan de validar en
// los handlers que consultan la tabla.
async fn delete_usuario(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = sqlx::query("UPDATE usuarios SET activo = FALSE WHERE id = $1 AND activo = TRUE")
        .bind(id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Usuario no encontrado".to_string()));
    }

    Ok(Json(json!({
        "message": "Usuario eliminado exitosamente",
        "data": null
    })))
}
