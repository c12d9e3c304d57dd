//! Handlers de terminales

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::json;
use validator::Validate;

use crate::dto::ApiResponse;
use crate::models::terminal::{CreateTerminalRequest, Terminal, UpdateTerminalRequest};
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_terminales).post(create_terminal))
        .route(
            "/:id",
            get(get_terminal)
                .put(update_terminal)
                .delete(delete_terminal),
        )
}

async fn get_terminales(State(state): State<AppState>) -> AppResult<Json<Vec<Terminal>>> {
    let terminales =
        sqlx::query_as::<_, Terminal>("SELECT * FROM terminales ORDER BY creado_en DESC")
            .fetch_all(&state.pool)
            .await?;

    Ok(Json(terminales))
}

async fn create_terminal(
    State(state): State<AppState>,
    Json(request): Json<CreateTerminalRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Terminal>>)> {
    request.validate()?;

    let terminal = sqlx::query_as::<_, Terminal>(
        r#"
        INSERT INTO terminales (nombre, codigo, empresa_id, direccion)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(request.nombre)
    .bind(request.codigo)
    .bind(request.empresa_id)
    .bind(request.direccion)
    .fetch_one(&state.pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Terminal creada exitosamente", terminal)),
    ))
}

async fn get_terminal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Terminal>> {
    let terminal = sqlx::query_as::<_, Terminal>("SELECT * FROM terminales WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Terminal no encontrada".to_string()))?;

    Ok(Json(terminal))
}

async fn update_terminal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateTerminalRequest>,
) -> AppResult<Json<ApiResponse<Terminal>>> {
    request.validate()?;

    let terminal = sqlx::query_as::<_, Terminal>(
        r#"
        UPDATE terminales
        SET nombre = COALESCE($2, nombre),
            codigo = COALESCE($3, codigo),
            empresa_id = COALESCE($4, empresa_id),
            direccion = COALESCE($5, direccion),
            activo = COALESCE($6, activo)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(request.nombre)
    .bind(request.codigo)
    .bind(request.empresa_id)
    .bind(request.direccion)
    .bind(request.activo)
    .fetch_optional(&state.pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Terminal no encontrada".to_string()))?;

    Ok(Json(ApiResponse::new(
        "Terminal actualizada exitosamente",
        terminal,
    )))
}

async fn delete_terminal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM terminales WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Terminal no encontrada".to_string()));
    }

    Ok(Json(json!({
        "message": "Terminal eliminada exitosamente",
        "data": null
    })))
}
