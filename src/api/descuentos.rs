//! Handlers de descuentos
//!
//! Las mutaciones consultan la sesión: el usuario que crea el descuento
//! queda registrado en la fila.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use rust_decimal::Decimal;
use serde_json::json;
use validator::Validate;

use crate::dto::ApiResponse;
use crate::middleware::sesion::UsuarioSesion;
use crate::models::descuento::{CreateDescuentoRequest, Descuento, UpdateDescuentoRequest};
use crate::state::AppState;
use crate::utils::errors::{validation_error, AppError, AppResult};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_descuentos).post(create_descuento))
        .route(
            "/:id",
            get(get_descuento)
                .put(update_descuento)
                .delete(delete_descuento),
        )
}

const TIPOS_VALIDOS: [&str; 2] = ["porcentaje", "monto"];

async fn get_descuentos(State(state): State<AppState>) -> AppResult<Json<Vec<Descuento>>> {
    let descuentos =
        sqlx::query_as::<_, Descuento>("SELECT * FROM descuentos ORDER BY creado_en DESC")
            .fetch_all(&state.pool)
            .await?;

    Ok(Json(descuentos))
}

async fn create_descuento(
    State(state): State<AppState>,
    usuario: UsuarioSesion,
    Json(request): Json<CreateDescuentoRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Descuento>>)> {
    request.validate()?;

    if !TIPOS_VALIDOS.contains(&request.tipo.as_str()) {
        return Err(validation_error(
            "tipo",
            "El tipo debe ser 'porcentaje' o 'monto'",
        ));
    }

    let valor = Decimal::from_f64_retain(request.valor)
        .ok_or_else(|| validation_error("valor", "El valor no es válido"))?;

    let descuento = sqlx::query_as::<_, Descuento>(
        r#"
        INSERT INTO descuentos (nombre, tipo, valor, combustible_id, cliente_id, creado_por)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(request.nombre)
    .bind(request.tipo)
    .bind(valor)
    .bind(request.combustible_id)
    .bind(request.cliente_id)
    .bind(usuario.id)
    .fetch_one(&state.pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Descuento creado exitosamente", descuento)),
    ))
}

async fn get_descuento(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Descuento>> {
    let descuento = sqlx::query_as::<_, Descuento>("SELECT * FROM descuentos WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Descuento no encontrado".to_string()))?;

    Ok(Json(descuento))
}

async fn update_descuento(
    State(state): State<AppState>,
    _usuario: UsuarioSesion,
    Path(id): Path<i32>,
    Json(request): Json<UpdateDescuentoRequest>,
) -> AppResult<Json<ApiResponse<Descuento>>> {
    request.validate()?;

    if let Some(tipo) = &request.tipo {
        if !TIPOS_VALIDOS.contains(&tipo.as_str()) {
            return Err(validation_error(
                "tipo",
                "El tipo debe ser 'porcentaje' o 'monto'",
            ));
        }
    }

    let valor = match request.valor {
        Some(v) => Some(
            Decimal::from_f64_retain(v)
                .ok_or_else(|| validation_error("valor", "El valor no es válido"))?,
        ),
        None => None,
    };

    let descuento = sqlx::query_as::<_, Descuento>(
        r#"
        UPDATE descuentos
        SET nombre = COALESCE($2, nombre),
            tipo = COALESCE($3, tipo),
            valor = COALESCE($4, valor),
            combustible_id = COALESCE($5, combustible_id),
            cliente_id = COALESCE($6, cliente_id),
            activo = COALESCE($7, activo)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(request.nombre)
    .bind(request.tipo)
    .bind(valor)
    .bind(request.combustible_id)
    .bind(request.cliente_id)
    .bind(request.activo)
    .fetch_optional(&state.pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Descuento no encontrado".to_string()))?;

    Ok(Json(ApiResponse::new(
        "Descuento actualizado exitosamente",
        descuento,
    )))
}

async fn delete_descuento(
    State(state): State<AppState>,
    _usuario: UsuarioSesion,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM descuentos WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Descuento no encontrado".to_string()));
    }

    Ok(Json(json!({
        "message": "Descuento eliminado exitosamente",
        "data": null
    })))
}
