use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::controllers::vehiculo_controller::VehiculoController;
use crate::dto::vehiculo_dto::{CreateVehiculoRequest, UpdateVehiculoRequest, VehiculoResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehiculo_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehiculo).get(list_vehiculos))
        .route(
            "/:id",
            get(get_vehiculo)
                .put(update_vehiculo)
                .delete(delete_vehiculo),
        )
}

#[derive(Debug, Deserialize)]
struct FiltroVehiculos {
    cliente_id: Option<i32>,
}

async fn create_vehiculo(
    State(state): State<AppState>,
    Json(request): Json<CreateVehiculoRequest>,
) -> Result<(StatusCode, Json<ApiResponse<VehiculoResponse>>), AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_vehiculos(
    State(state): State<AppState>,
    Query(filtro): Query<FiltroVehiculos>,
) -> Result<Json<Vec<VehiculoResponse>>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.list(filtro.cliente_id).await?;
    Ok(Json(response))
}

async fn get_vehiculo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<VehiculoResponse>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_vehiculo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateVehiculoRequest>,
) -> Result<Json<ApiResponse<VehiculoResponse>>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_vehiculo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehiculoController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({
        "message": "Vehículo eliminado exitosamente",
        "data": null
    })))
}
