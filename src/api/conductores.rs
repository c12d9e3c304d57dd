//! Handlers de conductores

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::dto::ApiResponse;
use crate::models::conductor::{Conductor, CreateConductorRequest, UpdateConductorRequest};
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_conductores).post(create_conductor))
        .route(
            "/:id",
            get(get_conductor)
                .put(update_conductor)
                .delete(delete_conductor),
        )
}

#[derive(Debug, Deserialize)]
struct Filtro {
    cliente_id: Option<i32>,
}

async fn get_conductores(
    State(state): State<AppState>,
    Query(filtro): Query<Filtro>,
) -> AppResult<Json<Vec<Conductor>>> {
    let conductores = match filtro.cliente_id {
        Some(cid) => {
            sqlx::query_as::<_, Conductor>(
                "SELECT * FROM conductores WHERE cliente_id = $1 ORDER BY creado_en DESC",
            )
            .bind(cid)
            .fetch_all(&state.pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Conductor>("SELECT * FROM conductores ORDER BY creado_en DESC")
                .fetch_all(&state.pool)
                .await?
        }
    };

    Ok(Json(conductores))
}

async fn create_conductor(
    State(state): State<AppState>,
    Json(request): Json<CreateConductorRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Conductor>>)> {
    request.validate()?;

    let conductor = sqlx::query_as::<_, Conductor>(
        r#"
        INSERT INTO conductores (cliente_id, nombre, identidad, licencia, telefono)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(request.cliente_id)
    .bind(request.nombre)
    .bind(request.identidad)
    .bind(request.licencia)
    .bind(request.telefono)
    .fetch_one(&state.pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Conductor creado exitosamente", conductor)),
    ))
}

async fn get_conductor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Conductor>> {
    let conductor = sqlx::query_as::<_, Conductor>("SELECT * FROM conductores WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Conductor no encontrado".to_string()))?;

    Ok(Json(conductor))
}

async fn update_conductor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateConductorRequest>,
) -> AppResult<Json<ApiResponse<Conductor>>> {
    request.validate()?;

    let conductor = sqlx::query_as::<_, Conductor>(
        r#"
        UPDATE conductores
        SET nombre = COALESCE($2, nombre),
            identidad = COALESCE($3, identidad),
            licencia = COALESCE($4, licencia),
            telefono = COALESCE($5, telefono),
            activo = COALESCE($6, activo)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(request.nombre)
    .bind(request.identidad)
    .bind(request.licencia)
    .bind(request.telefono)
    .bind(request.activo)
    .fetch_optional(&state.pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Conductor no encontrado".to_string()))?;

    Ok(Json(ApiResponse::new(
        "Conductor actualizado exitosamente",
        conductor,
    )))
}

async fn delete_conductor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM conductores WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Conductor no encontrado".to_string()));
    }

    Ok(Json(json!({
        "message": "Conductor eliminado exitosamente",
        "data": null
    })))
}
