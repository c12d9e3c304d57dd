//! Handlers de los catálogos de clasificación
//!
//! Países, estados, monedas, unidades de medida, canales, subcanales y tipos
//! de tarjeta. Todos siguen el mismo CRUD plano; la edición reemplaza la
//! fila completa.

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
use crate::models::catalogo::{
    Canal, CreateEstadoRequest, CreateMonedaRequest, CreateSubcanalRequest,
    CreateTipoTarjetaRequest, CreateUnidadRequest, Estado, Moneda, NombreRequest, Pais, Subcanal,
    TipoTarjeta, UnidadMedida,
};
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn router() -> Router<AppState> {
    Router::new()
        .nest(
            "/api/paises",
            Router::new()
                .route("/", get(get_paises).post(create_pais))
                .route("/:id", axum::routing::put(update_pais).delete(delete_pais)),
        )
        .nest(
            "/api/estados",
            Router::new()
                .route("/", get(get_estados).post(create_estado))
                .route(
                    "/:id",
                    axum::routing::put(update_estado).delete(delete_estado),
                ),
        )
        .nest(
            "/api/monedas",
            Router::new()
                .route("/", get(get_monedas).post(create_moneda))
                .route(
                    "/:id",
                    axum::routing::put(update_moneda).delete(delete_moneda),
                ),
        )
        .nest(
            "/api/unidades-medida",
            Router::new()
                .route("/", get(get_unidades).post(create_unidad))
                .route(
                    "/:id",
                    axum::routing::put(update_unidad).delete(delete_unidad),
                ),
        )
        .nest(
            "/api/canales",
            Router::new()
                .route("/", get(get_canales).post(create_canal))
                .route(
                    "/:id",
                    axum::routing::put(update_canal).delete(delete_canal),
                ),
        )
        .nest(
            "/api/subcanales",
            Router::new()
                .route("/", get(get_subcanales).post(create_subcanal))
                .route(
                    "/:id",
                    axum::routing::put(update_subcanal).delete(delete_subcanal),
                ),
        )
        .nest(
            "/api/tipos-tarjeta",
            Router::new()
                .route("/", get(get_tipos_tarjeta).post(create_tipo_tarjeta))
                .route(
                    "/:id",
                    axum::routing::put(update_tipo_tarjeta).delete(delete_tipo_tarjeta),
                ),
        )
}

fn no_encontrado(recurso: &str) -> AppError {
    AppError::NotFound(format!("{} no encontrado", recurso))
}

// --- Países ---

async fn get_paises(State(state): State<AppState>) -> AppResult<Json<Vec<Pais>>> {
    let paises = sqlx::query_as::<_, Pais>("SELECT * FROM paises ORDER BY nombre")
        .fetch_all(&state.pool)
        .await?;
    Ok(Json(paises))
}

async fn create_pais(
    State(state): State<AppState>,
    Json(request): Json<NombreRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Pais>>)> {
    request.validate()?;
    let pais = sqlx::query_as::<_, Pais>("INSERT INTO paises (nombre) VALUES ($1) RETURNING *")
        .bind(request.nombre)
        .fetch_one(&state.pool)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("País creado exitosamente", pais)),
    ))
}

async fn update_pais(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<NombreRequest>,
) -> AppResult<Json<ApiResponse<Pais>>> {
    request.validate()?;
    let pais =
        sqlx::query_as::<_, Pais>("UPDATE paises SET nombre = $2 WHERE id = $1 RETURNING *")
            .bind(id)
            .bind(request.nombre)
            .fetch_optional(&state.pool)
            .await?
            .ok_or_else(|| no_encontrado("País"))?;
    Ok(Json(ApiResponse::new("País actualizado exitosamente", pais)))
}

async fn delete_pais(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM paises WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(no_encontrado("País"));
    }
    Ok(Json(json!({ "message": "País eliminado exitosamente", "data": null })))
}

// --- Estados ---

#[derive(Debug, Deserialize)]
struct FiltroEstados {
    pais_id: Option<i32>,
}

async fn get_estados(
    State(state): State<AppState>,
    Query(filtro): Query<FiltroEstados>,
) -> AppResult<Json<Vec<Estado>>> {
    let estados = match filtro.pais_id {
        Some(pid) => {
            sqlx::query_as::<_, Estado>(
                "SELECT * FROM estados WHERE pais_id = $1 ORDER BY nombre",
            )
            .bind(pid)
            .fetch_all(&state.pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Estado>("SELECT * FROM estados ORDER BY nombre")
                .fetch_all(&state.pool)
                .await?
        }
    };
    Ok(Json(estados))
}

async fn create_estado(
    State(state): State<AppState>,
    Json(request): Json<CreateEstadoRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Estado>>)> {
    request.validate()?;
    let estado = sqlx::query_as::<_, Estado>(
        "INSERT INTO estados (nombre, pais_id) VALUES ($1, $2) RETURNING *",
    )
    .bind(request.nombre)
    .bind(request.pais_id)
    .fetch_one(&state.pool)
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Estado creado exitosamente", estado)),
    ))
}

async fn update_estado(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CreateEstadoRequest>,
) -> AppResult<Json<ApiResponse<Estado>>> {
    request.validate()?;
    let estado = sqlx::query_as::<_, Estado>(
        "UPDATE estados SET nombre = $2, pais_id = $3 WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(request.nombre)
    .bind(request.pais_id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or_else(|| no_encontrado("Estado"))?;
    Ok(Json(ApiResponse::new(
        "Estado actualizado exitosamente",
        estado,
    )))
}

async fn delete_estado(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM estados WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(no_encontrado("Estado"));
    }
    Ok(Json(json!({ "message": "Estado eliminado exitosamente", "data": null })))
}

// --- Monedas ---

async fn get_monedas(State(state): State<AppState>) -> AppResult<Json<Vec<Moneda>>> {
    let monedas = sqlx::query_as::<_, Moneda>("SELECT * FROM monedas ORDER BY nombre")
        .fetch_all(&state.pool)
        .await?;
    Ok(Json(monedas))
}

async fn create_moneda(
    State(state): State<AppState>,
    Json(request): Json<CreateMonedaRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Moneda>>)> {
    request.validate()?;
    let moneda = sqlx::query_as::<_, Moneda>(
        "INSERT INTO monedas (nombre, codigo, simbolo) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(request.nombre)
    .bind(request.codigo)
    .bind(request.simbolo)
    .fetch_one(&state.pool)
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Moneda creada exitosamente", moneda)),
    ))
}

async fn update_moneda(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CreateMonedaRequest>,
) -> AppResult<Json<ApiResponse<Moneda>>> {
    request.validate()?;
    let moneda = sqlx::query_as::<_, Moneda>(
        "UPDATE monedas SET nombre = $2, codigo = $3, simbolo = $4 WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(request.nombre)
    .bind(request.codigo)
    .bind(request.simbolo)
    .fetch_optional(&state.pool)
    .await?
    .ok_or_else(|| no_encontrado("Moneda"))?;
    Ok(Json(ApiResponse::new(
        "Moneda actualizada exitosamente",
        moneda,
    )))
}

async fn delete_moneda(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM monedas WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(no_encontrado("Moneda"));
    }
    Ok(Json(json!({ "message": "Moneda eliminada exitosamente", "data": null })))
}

// --- Unidades de medida ---

async fn get_unidades(State(state): State<AppState>) -> AppResult<Json<Vec<UnidadMedida>>> {
    let unidades =
        sqlx::query_as::<_, UnidadMedida>("SELECT * FROM unidades_medida ORDER BY nombre")
            .fetch_all(&state.pool)
            .await?;
    Ok(Json(unidades))
}

async fn create_unidad(
    State(state): State<AppState>,
    Json(request): Json<CreateUnidadRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<UnidadMedida>>)> {
    request.validate()?;
    let unidad = sqlx::query_as::<_, UnidadMedida>(
        "INSERT INTO unidades_medida (nombre, abreviatura) VALUES ($1, $2) RETURNING *",
    )
    .bind(request.nombre)
    .bind(request.abreviatura)
    .fetch_one(&state.pool)
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Unidad de medida creada exitosamente",
            unidad,
        )),
    ))
}

async fn update_unidad(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CreateUnidadRequest>,
) -> AppResult<Json<ApiResponse<UnidadMedida>>> {
    request.validate()?;
    let unidad = sqlx::query_as::<_, UnidadMedida>(
        "UPDATE unidades_medida SET nombre = $2, abreviatura = $3 WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(request.nombre)
    .bind(request.abreviatura)
    .fetch_optional(&state.pool)
    .await?
    .ok_or_else(|| no_encontrado("Unidad de medida"))?;
    Ok(Json(ApiResponse::new(
        "Unidad de medida actualizada exitosamente",
        unidad,
    )))
}

async fn delete_unidad(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM unidades_medida WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(no_encontrado("Unidad de medida"));
    }
    Ok(Json(
        json!({ "message": "Unidad de medida eliminada exitosamente", "data": null }),
    ))
}

// --- Canales ---

async fn get_canales(State(state): State<AppState>) -> AppResult<Json<Vec<Canal>>> {
    let canales = sqlx::query_as::<_, Canal>("SELECT * FROM canales ORDER BY nombre")
        .fetch_all(&state.pool)
        .await?;
    Ok(Json(canales))
}

async fn create_canal(
    State(state): State<AppState>,
    Json(request): Json<NombreRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Canal>>)> {
    request.validate()?;
    let canal = sqlx::query_as::<_, Canal>("INSERT INTO canales (nombre) VALUES ($1) RETURNING *")
        .bind(request.nombre)
        .fetch_one(&state.pool)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Canal creado exitosamente", canal)),
    ))
}

async fn update_canal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<NombreRequest>,
) -> AppResult<Json<ApiResponse<Canal>>> {
    request.validate()?;
    let canal =
        sqlx::query_as::<_, Canal>("UPDATE canales SET nombre = $2 WHERE id = $1 RETURNING *")
            .bind(id)
            .bind(request.nombre)
            .fetch_optional(&state.pool)
            .await?
            .ok_or_else(|| no_encontrado("Canal"))?;
    Ok(Json(ApiResponse::new(
        "Canal actualizado exitosamente",
        canal,
    )))
}

async fn delete_canal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM canales WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(no_encontrado("Canal"));
    }
    Ok(Json(json!({ "message": "Canal eliminado exitosamente", "data": null })))
}

// --- Subcanales ---

#[derive(Debug, Deserialize)]
struct FiltroSubcanales {
    canal_id: Option<i32>,
}

async fn get_subcanales(
    State(state): State<AppState>,
    Query(filtro): Query<FiltroSubcanales>,
) -> AppResult<Json<Vec<Subcanal>>> {
    let subcanales = match filtro.canal_id {
        Some(cid) => {
            sqlx::query_as::<_, Subcanal>(
                "SELECT * FROM subcanales WHERE canal_id = $1 ORDER BY nombre",
            )
            .bind(cid)
            .fetch_all(&state.pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Subcanal>("SELECT * FROM subcanales ORDER BY nombre")
                .fetch_all(&state.pool)
                .await?
        }
    };
    Ok(Json(subcanales))
}

async fn create_subcanal(
    State(state): State<AppState>,
    Json(request): Json<CreateSubcanalRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Subcanal>>)> {
    request.validate()?;
    let subcanal = sqlx::query_as::<_, Subcanal>(
        "INSERT INTO subcanales (nombre, canal_id) VALUES ($1, $2) RETURNING *",
    )
    .bind(request.nombre)
    .bind(request.canal_id)
    .fetch_one(&state.pool)
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Subcanal creado exitosamente", subcanal)),
    ))
}

async fn update_subcanal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CreateSubcanalRequest>,
) -> AppResult<Json<ApiResponse<Subcanal>>> {
    request.validate()?;
    let subcanal = sqlx::query_as::<_, Subcanal>(
        "UPDATE subcanales SET nombre = $2, canal_id = $3 WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(request.nombre)
    .bind(request.canal_id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or_else(|| no_encontrado("Subcanal"))?;
    Ok(Json(ApiResponse::new(
        "Subcanal actualizado exitosamente",
        subcanal,
    )))
}

async fn delete_subcanal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM subcanales WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(no_encontrado("Subcanal"));
    }
    Ok(Json(json!({ "message": "Subcanal eliminado exitosamente", "data": null })))
}

// --- Tipos de tarjeta ---

async fn get_tipos_tarjeta(State(state): State<AppState>) -> AppResult<Json<Vec<TipoTarjeta>>> {
    let tipos = sqlx::query_as::<_, TipoTarjeta>("SELECT * FROM tipos_tarjeta ORDER BY nombre")
        .fetch_all(&state.pool)
        .await?;
    Ok(Json(tipos))
}

async fn create_tipo_tarjeta(
    State(state): State<AppState>,
    Json(request): Json<CreateTipoTarjetaRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<TipoTarjeta>>)> {
    request.validate()?;
    let tipo = sqlx::query_as::<_, TipoTarjeta>(
        "INSERT INTO tipos_tarjeta (nombre, descripcion) VALUES ($1, $2) RETURNING *",
    )
    .bind(request.nombre)
    .bind(request.descripcion)
    .fetch_one(&state.pool)
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Tipo de tarjeta creado exitosamente",
            tipo,
        )),
    ))
}

async fn update_tipo_tarjeta(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CreateTipoTarjetaRequest>,
) -> AppResult<Json<ApiResponse<TipoTarjeta>>> {
    request.validate()?;
    let tipo = sqlx::query_as::<_, TipoTarjeta>(
        "UPDATE tipos_tarjeta SET nombre = $2, descripcion = $3 WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(request.nombre)
    .bind(request.descripcion)
    .fetch_optional(&state.pool)
    .await?
    .ok_or_else(|| no_encontrado("Tipo de tarjeta"))?;
    Ok(Json(ApiResponse::new(
        "Tipo de tarjeta actualizado exitosamente",
        tipo,
    )))
}

async fn delete_tipo_tarjeta(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM tipos_tarjeta WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(no_encontrado("Tipo de tarjeta"));
    }
    Ok(Json(
        json!({ "message": "Tipo de tarjeta eliminado exitosamente", "data": null }),
    ))
}
