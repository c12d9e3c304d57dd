//! Handlers de combustibles y sus precios

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
use crate::models::combustible::{
    Combustible, CreateCombustibleRequest, CreatePrecioRequest, PrecioCombustible,
    UpdateCombustibleRequest,
};
use crate::state::AppState;
use crate::utils::errors::{validation_error, AppError, AppResult};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_combustibles).post(create_combustible))
        .route(
            "/:id",
            get(get_combustible)
                .put(update_combustible)
                .delete(delete_combustible),
        )
        .route("/:id/precios", get(get_precios).post(create_precio))
}

async fn get_combustibles(State(state): State<AppState>) -> AppResult<Json<Vec<Combustible>>> {
    let combustibles = sqlx::query_as::<_, Combustible>("SELECT * FROM combustibles ORDER BY id")
        .fetch_all(&state.pool)
        .await?;

    Ok(Json(combustibles))
}

async fn create_combustible(
    State(state): State<AppState>,
    Json(request): Json<CreateCombustibleRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Combustible>>)> {
    request.validate()?;

    let combustible = sqlx::query_as::<_, Combustible>(
        r#"
        INSERT INTO combustibles (nombre, unidad_medida_id)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(request.nombre)
    .bind(request.unidad_medida_id)
    .fetch_one(&state.pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Combustible creado exitosamente",
            combustible,
        )),
    ))
}

async fn get_combustible(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Combustible>> {
    let combustible = sqlx::query_as::<_, Combustible>("SELECT * FROM combustibles WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Combustible no encontrado".to_string()))?;

    Ok(Json(combustible))
}

async fn update_combustible(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateCombustibleRequest>,
) -> AppResult<Json<ApiResponse<Combustible>>> {
    request.validate()?;

    let combustible = sqlx::query_as::<_, Combustible>(
        r#"
        UPDATE combustibles
        SET nombre = COALESCE($2, nombre),
            unidad_medida_id = COALESCE($3, unidad_medida_id),
            activo = COALESCE($4, activo)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(request.nombre)
    .bind(request.unidad_medida_id)
    .bind(request.activo)
    .fetch_optional(&state.pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Combustible no encontrado".to_string()))?;

    Ok(Json(ApiResponse::new(
        "Combustible actualizado exitosamente",
        combustible,
    )))
}

async fn delete_combustible(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM combustibles WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Combustible no encontrado".to_string()));
    }

    Ok(Json(json!({
        "message": "Combustible eliminado exitosamente",
        "data": null
    })))
}

/// Historial de precios del combustible, del más reciente al más antiguo
async fn get_precios(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<PrecioCombustible>>> {
    let precios = sqlx::query_as::<_, PrecioCombustible>(
        "SELECT * FROM precios_combustible WHERE combustible_id = $1 ORDER BY vigente_desde DESC",
    )
    .bind(id)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(precios))
}

async fn create_precio(
    State(state): State<AppState>,
    usuario: Option<UsuarioSesion>,
    Path(id): Path<i32>,
    Json(request): Json<CreatePrecioRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<PrecioCombustible>>)> {
    request.validate()?;

    let precio = Decimal::from_f64_retain(request.precio)
        .ok_or_else(|| validation_error("precio", "El precio no es válido"))?;
    if precio <= Decimal::ZERO {
        return Err(validation_error("precio", "El precio debe ser positivo"));
    }

    let fila = sqlx::query_as::<_, PrecioCombustible>(
        r#"
        INSERT INTO precios_combustible (combustible_id, moneda_id, precio, vigente_desde, creado_por)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(request.moneda_id)
    .bind(precio)
    .bind(request.vigente_desde)
    .bind(usuario.map(|u| u.id))
    .fetch_one(&state.pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Precio registrado exitosamente", fila)),
    ))
}
