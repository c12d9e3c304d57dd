use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::controllers::billetera_controller::BilleteraController;
use crate::dto::billetera_dto::{
    BilleteraResponse, CreateBilleteraRequest, ResetBilleterasRequest, UpdateBilleteraRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::sesion::UsuarioSesion;
use crate::models::billetera::{ReinicioBilletera, TransaccionFlota};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_billetera_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_billetera).get(list_billeteras))
        .route("/reiniciar", post(reiniciar_billeteras))
        .route("/:id/movimientos", get(get_movimientos))
        .route(
            "/:id",
            get(get_billetera)
                .put(update_billetera)
                .delete(delete_billetera),
        )
}

async fn create_billetera(
    State(state): State<AppState>,
    Json(request): Json<CreateBilleteraRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BilleteraResponse>>), AppError> {
    let controller = BilleteraController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_billeteras(
    State(state): State<AppState>,
) -> Result<Json<Vec<BilleteraResponse>>, AppError> {
    let controller = BilleteraController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_billetera(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<BilleteraResponse>, AppError> {
    let controller = BilleteraController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_billetera(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateBilleteraRequest>,
) -> Result<Json<ApiResponse<BilleteraResponse>>, AppError> {
    let controller = BilleteraController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_billetera(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = BilleteraController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({
        "message": "Billetera eliminada exitosamente",
        "data": null
    })))
}

async fn get_movimientos(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<TransaccionFlota>>, AppError> {
    let controller = BilleteraController::new(state.pool.clone());
    let response = controller.movimientos(id).await?;
    Ok(Json(response))
}

/// Reinicio masivo de billeteras; requiere sesión iniciada.
async fn reiniciar_billeteras(
    State(state): State<AppState>,
    usuario: UsuarioSesion,
    Json(request): Json<ResetBilleterasRequest>,
) -> Result<Json<ApiResponse<Vec<ReinicioBilletera>>>, AppError> {
    let controller = BilleteraController::new(state.pool.clone());
    let response = controller.reiniciar(&usuario, request).await?;
    Ok(Json(response))
}
