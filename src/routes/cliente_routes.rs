use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::controllers::cliente_controller::ClienteController;
use crate::dto::cliente_dto::{ClienteResponse, CreateClienteRequest, UpdateClienteRequest};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::pagination::{Paginacion, Paginado};

pub fn create_cliente_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cliente).get(list_clientes))
        .route(
            "/:id",
            get(get_cliente).put(update_cliente).delete(delete_cliente),
        )
}

fn campo_invalido(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::BadRequest(format!("Formulario inválido: {}", e))
}

fn entero(valor: &str, campo: &'static str) -> Result<i32, AppError> {
    valor
        .parse()
        .map_err(|_| validation_error(campo, "Debe ser un valor numérico"))
}

/// Volcar el formulario multipart de alta en el request y el archivo de logo
async fn parse_create_multipart(
    mut multipart: Multipart,
) -> Result<(CreateClienteRequest, Option<Vec<u8>>), AppError> {
    let mut request = CreateClienteRequest::default();
    let mut logo = None;

    while let Some(field) = multipart.next_field().await.map_err(campo_invalido)? {
        let campo = field.name().unwrap_or("").to_string();
        match campo.as_str() {
            "logo" => logo = Some(field.bytes().await.map_err(campo_invalido)?.to_vec()),
            "nombre" => request.nombre = field.text().await.map_err(campo_invalido)?,
            "pais" => request.pais = entero(&field.text().await.map_err(campo_invalido)?, "pais")?,
            "estado" => {
                request.estado = entero(&field.text().await.map_err(campo_invalido)?, "estado")?
            }
            "ciudad" => request.ciudad = field.text().await.map_err(campo_invalido)?,
            "email" => request.email = field.text().await.map_err(campo_invalido)?,
            "telefono" => request.telefono = field.text().await.map_err(campo_invalido)?,
            "nfi" => request.nfi = field.text().await.map_err(campo_invalido)?,
            "canal_id" => {
                request.canal_id = Some(entero(
                    &field.text().await.map_err(campo_invalido)?,
                    "canal_id",
                )?)
            }
            "subcanal_id" => {
                request.subcanal_id = Some(entero(
                    &field.text().await.map_err(campo_invalido)?,
                    "subcanal_id",
                )?)
            }
            _ => {}
        }
    }

    Ok((request, logo))
}

async fn parse_update_multipart(
    mut multipart: Multipart,
) -> Result<(UpdateClienteRequest, Option<Vec<u8>>), AppError> {
    let mut request = UpdateClienteRequest::default();
    let mut logo = None;

    while let Some(field) = multipart.next_field().await.map_err(campo_invalido)? {
        let campo = field.name().unwrap_or("").to_string();
        match campo.as_str() {
            "logo" => logo = Some(field.bytes().await.map_err(campo_invalido)?.to_vec()),
            "nombre" => request.nombre = Some(field.text().await.map_err(campo_invalido)?),
            "pais" => {
                request.pais = Some(entero(&field.text().await.map_err(campo_invalido)?, "pais")?)
            }
            "estado" => {
                request.estado = Some(entero(
                    &field.text().await.map_err(campo_invalido)?,
                    "estado",
                )?)
            }
            "ciudad" => request.ciudad = Some(field.text().await.map_err(campo_invalido)?),
            "email" => request.email = Some(field.text().await.map_err(campo_invalido)?),
            "telefono" => request.telefono = Some(field.text().await.map_err(campo_invalido)?),
            "nfi" => request.nfi = Some(field.text().await.map_err(campo_invalido)?),
            "canal_id" => {
                request.canal_id = Some(entero(
                    &field.text().await.map_err(campo_invalido)?,
                    "canal_id",
                )?)
            }
            "subcanal_id" => {
                request.subcanal_id = Some(entero(
                    &field.text().await.map_err(campo_invalido)?,
                    "subcanal_id",
                )?)
            }
            "activo" => {
                request.activo =
                    Some(field.text().await.map_err(campo_invalido)? == "true")
            }
            _ => {}
        }
    }

    Ok((request, logo))
}

async fn create_cliente(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<ClienteResponse>>), AppError> {
    let (request, logo) = parse_create_multipart(multipart).await?;
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.create(request, logo).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_clientes(
    State(state): State<AppState>,
    Query(paginacion): Query<Paginacion>,
) -> Result<Json<Paginado<ClienteResponse>>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.list(paginacion).await?;
    Ok(Json(response))
}

async fn get_cliente(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ClienteResponse>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_cliente(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<ClienteResponse>>, AppError> {
    let (request, logo) = parse_update_multipart(multipart).await?;
    let controller = ClienteController::new(state.pool.clone());
    let response = controller.update(id, request, logo).await?;
    Ok(Json(response))
}

async fn delete_cliente(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ClienteController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({
        "message": "Cliente eliminado exitosamente",
        "data": null
    })))
}
