use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::controllers::tarjeta_controller::TarjetaController;
use crate::dto::tarjeta_dto::{CreateTarjetaRequest, TarjetaResponse, UpdateTarjetaRequest};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_tarjeta_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_tarjeta).get(list_tarjetas))
        .route(
            "/:id",
            get(get_tarjeta).put(update_tarjeta).delete(delete_tarjeta),
        )
}

#[derive(Debug, Deserialize)]
struct FiltroTarjetas {
    cliente_id: Option<i32>,
}

async fn create_tarjeta(
    State(state): State<AppState>,
    Json(request): Json<CreateTarjetaRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TarjetaResponse>>), AppError> {
    let controller = TarjetaController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_tarjetas(
    State(state): State<AppState>,
    Query(filtro): Query<FiltroTarjetas>,
) -> Result<Json<Vec<TarjetaResponse>>, AppError> {
    let controller = TarjetaController::new(state.pool.clone());
    let response = controller.list(filtro.cliente_id).await?;
    Ok(Json(response))
}

async fn get_tarjeta(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<TarjetaResponse>, AppError> {
    let controller = TarjetaController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_tarjeta(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateTarjetaRequest>,
) -> Result<Json<ApiResponse<TarjetaResponse>>, AppError> {
    let controller = TarjetaController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_tarjeta(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = TarjetaController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({
        "message": "Tarjeta eliminada exitosamente",
        "data": null
    })))
}
