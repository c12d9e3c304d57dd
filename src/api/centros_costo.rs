//! Handlers de centros de costo

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
use crate::models::centro_costo::{
    CentroCosto, CreateCentroCostoRequest, UpdateCentroCostoRequest,
};
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_centros).post(create_centro))
        .route(
            "/:id",
            get(get_centro).put(update_centro).delete(delete_centro),
        )
}

#[derive(Debug, Deserialize)]
struct Filtro {
    empresa_id: Option<i32>,
}

async fn get_centros(
    State(state): State<AppState>,
    Query(filtro): Query<Filtro>,
) -> AppResult<Json<Vec<CentroCosto>>> {
    let centros = match filtro.empresa_id {
        Some(eid) => {
            sqlx::query_as::<_, CentroCosto>(
                "SELECT * FROM centros_costo WHERE empresa_id = $1 ORDER BY creado_en DESC",
            )
            .bind(eid)
            .fetch_all(&state.pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, CentroCosto>("SELECT * FROM centros_costo ORDER BY creado_en DESC")
                .fetch_all(&state.pool)
                .await?
        }
    };

    Ok(Json(centros))
}

async fn create_centro(
    State(state): State<AppState>,
    Json(request): Json<CreateCentroCostoRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<CentroCosto>>)> {
    request.validate()?;

    let centro = sqlx::query_as::<_, CentroCosto>(
        r#"
        INSERT INTO centros_costo (nombre, codigo, empresa_id)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(request.nombre)
    .bind(request.codigo)
    .bind(request.empresa_id)
    .fetch_one(&state.pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Centro de costo creado exitosamente",
            centro,
        )),
    ))
}

async fn get_centro(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<CentroCosto>> {
    let centro = sqlx::query_as::<_, CentroCosto>("SELECT * FROM centros_costo WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Centro de costo no encontrado".to_string()))?;

    Ok(Json(centro))
}

async fn update_centro(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateCentroCostoRequest>,
) -> AppResult<Json<ApiResponse<CentroCosto>>> {
    request.validate()?;

    let centro = sqlx::query_as::<_, CentroCosto>(
        r#"
        UPDATE centros_costo
        SET nombre = COALESCE($2, nombre),
            codigo = COALESCE($3, codigo),
            empresa_id = COALESCE($4, empresa_id),
            activo = COALESCE($5, activo)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(request.nombre)
    .bind(request.codigo)
    .bind(request.empresa_id)
    .bind(request.activo)
    .fetch_optional(&state.pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Centro de costo no encontrado".to_string()))?;

    Ok(Json(ApiResponse::new(
        "Centro de costo actualizado exitosamente",
        centro,
    )))
}

async fn delete_centro(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM centros_costo WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(
            "Centro de costo no encontrado".to_string(),
        ));
    }

    Ok(Json(json!({
        "message": "Centro de costo eliminado exitosamente",
        "data": null
    })))
}
