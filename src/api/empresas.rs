//! Handlers de empresas

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::json;
use validator::Validate;

use crate::dto::ApiResponse;
use crate::models::empresa::{CreateEmpresaRequest, Empresa, UpdateEmpresaRequest};
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_empresas).post(create_empresa))
        .route(
            "/:id",
            get(get_empresa).put(update_empresa).delete(delete_empresa),
        )
}

async fn get_empresas(State(state): State<AppState>) -> AppResult<Json<Vec<Empresa>>> {
    let empresas = sqlx::query_as::<_, Empresa>("SELECT * FROM empresas ORDER BY creado_en DESC")
        .fetch_all(&state.pool)
        .await?;

    Ok(Json(empresas))
}

async fn create_empresa(
    State(state): State<AppState>,
    Json(request): Json<CreateEmpresaRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Empresa>>)> {
    request.validate()?;

    let empresa = sqlx::query_as::<_, Empresa>(
        r#"
        INSERT INTO empresas (nombre, rtn, direccion, telefono)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(request.nombre)
    .bind(request.rtn)
    .bind(request.direccion)
    .bind(request.telefono)
    .fetch_one(&state.pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Empresa creada exitosamente", empresa)),
    ))
}

async fn get_empresa(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Empresa>> {
    let empresa = sqlx::query_as::<_, Empresa>("SELECT * FROM empresas WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Empresa no encontrada".to_string()))?;

    Ok(Json(empresa))
}

async fn update_empresa(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateEmpresaRequest>,
) -> AppResult<Json<ApiResponse<Empresa>>> {
    request.validate()?;

    let empresa = sqlx::query_as::<_, Empresa>(
        r#"
        UPDATE empresas
        SET nombre = COALESCE($2, nombre),
            rtn = COALESCE($3, rtn),
            direccion = COALESCE($4, direccion),
            telefono = COALESCE($5, telefono),
            activo = COALESCE($6, activo)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(request.nombre)
    .bind(request.rtn)
    .bind(request.direccion)
    .bind(request.telefono)
    .bind(request.activo)
    .fetch_optional(&state.pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Empresa no encontrada".to_string()))?;

    Ok(Json(ApiResponse::new(
        "Empresa actualizada exitosamente",
        empresa,
    )))
}

async fn delete_empresa(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM empresas WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Empresa no encontrada".to_string()));
    }

    Ok(Json(json!({
        "message": "Empresa eliminada exitosamente",
        "data": null
    })))
}
