//! Handlers del libro de puntos y canjes de lealtad

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use validator::Validate;

use crate::dto::ApiResponse;
use crate::models::punto::{Canje, CreateCanjeRequest, CreatePuntoRequest, Punto};
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_punto))
        .route("/miembro/:miembro_id", get(get_puntos_de_miembro))
        .route("/miembro/:miembro_id/saldo", get(get_saldo))
        .route("/canjes", post(create_canje))
        .route("/canjes/miembro/:miembro_id", get(get_canjes_de_miembro))
}

async fn get_puntos_de_miembro(
    State(state): State<AppState>,
    Path(miembro_id): Path<i32>,
) -> AppResult<Json<Vec<Punto>>> {
    let puntos = sqlx::query_as::<_, Punto>(
        "SELECT * FROM puntos WHERE miembro_id = $1 ORDER BY creado_en DESC",
    )
    .bind(miembro_id)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(puntos))
}

async fn create_punto(
    State(state): State<AppState>,
    Json(request): Json<CreatePuntoRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Punto>>)> {
    request.validate()?;

    let punto = sqlx::query_as::<_, Punto>(
        r#"
        INSERT INTO puntos (miembro_id, transaccion_id, puntos, motivo)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(request.miembro_id)
    .bind(request.transaccion_id)
    .bind(request.puntos)
    .bind(request.motivo)
    .fetch_one(&state.pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Puntos acreditados exitosamente", punto)),
    ))
}

/// Saldo = puntos acreditados menos puntos canjeados. Dos consultas
/// independientes, como el resto de los listados.
async fn get_saldo(
    State(state): State<AppState>,
    Path(miembro_id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let acreditados: (i64,) =
        sqlx::query_as("SELECT COALESCE(SUM(puntos), 0) FROM puntos WHERE miembro_id = $1")
            .bind(miembro_id)
            .fetch_one(&state.pool)
            .await?;

    let canjeados: (i64,) =
        sqlx::query_as("SELECT COALESCE(SUM(puntos), 0) FROM canjes WHERE miembro_id = $1")
            .bind(miembro_id)
            .fetch_one(&state.pool)
            .await?;

    Ok(Json(json!({
        "miembro_id": miembro_id,
        "acreditados": acreditados.0,
        "canjeados": canjeados.0,
        "saldo": acreditados.0 - canjeados.0,
    })))
}

async fn get_canjes_de_miembro(
    State(state): State<AppState>,
    Path(miembro_id): Path<i32>,
) -> AppResult<Json<Vec<Canje>>> {
    let canjes = sqlx::query_as::<_, Canje>(
        "SELECT * FROM canjes WHERE miembro_id = $1 ORDER BY creado_en DESC",
    )
    .bind(miembro_id)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(canjes))
}

async fn create_canje(
    State(state): State<AppState>,
    Json(request): Json<CreateCanjeRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Canje>>)> {
    request.validate()?;

    let acreditados: (i64,) =
        sqlx::query_as("SELECT COALESCE(SUM(puntos), 0) FROM puntos WHERE miembro_id = $1")
            .bind(request.miembro_id)
            .fetch_one(&state.pool)
            .await?;
    let canjeados: (i64,) =
        sqlx::query_as("SELECT COALESCE(SUM(puntos), 0) FROM canjes WHERE miembro_id = $1")
            .bind(request.miembro_id)
            .fetch_one(&state.pool)
            .await?;

    if acreditados.0 - canjeados.0 < request.puntos as i64 {
        return Err(AppError::BadRequest(
            "El miembro no tiene puntos suficientes".to_string(),
        ));
    }

    let canje = sqlx::query_as::<_, Canje>(
        r#"
        INSERT INTO canjes (miembro_id, puntos, descripcion)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(request.miembro_id)
    .bind(request.puntos)
    .bind(request.descripcion)
    .fetch_one(&state.pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Canje registrado exitosamente", canje)),
    ))
}
