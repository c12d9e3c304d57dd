use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::controllers::transaccion_controller::TransaccionController;
use crate::dto::transaccion_dto::{
    CreateTransaccionRequest, TransaccionResponse, UpdateTransaccionRequest,
};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::{Paginacion, Paginado};

pub fn create_transaccion_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_transaccion).get(list_transacciones))
        .route(
            "/:id",
            get(get_transaccion)
                .put(update_transaccion)
                .delete(delete_transaccion),
        )
}

async fn create_transaccion(
    State(state): State<AppState>,
    Json(request): Json<CreateTransaccionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TransaccionResponse>>), AppError> {
    let controller = TransaccionController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_transacciones(
    State(state): State<AppState>,
    Query(paginacion): Query<Paginacion>,
) -> Result<Json<Paginado<TransaccionResponse>>, AppError> {
    let controller = TransaccionController::new(state.pool.clone());
    let response = controller.list(paginacion).await?;
    Ok(Json(response))
}

async fn get_transaccion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<TransaccionResponse>, AppError> {
    let controller = TransaccionController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_transaccion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateTransaccionRequest>,
) -> Result<Json<ApiResponse<TransaccionResponse>>, AppError> {
    let controller = TransaccionController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_transaccion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = TransaccionController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({
        "message": "Transacción eliminada exitosamente",
        "data": null
    })))
}
