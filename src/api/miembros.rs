//! Handlers de miembros del programa de lealtad
//!
//! El alta llega como formulario multipart con la foto como archivo; la foto
//! se guarda como blob y se devuelve en base64 dentro del JSON.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::dto::ApiResponse;
use crate::models::miembro::{Miembro, MiembroResponse};
use crate::state::AppState;
use crate::utils::errors::{validation_error, AppError, AppResult};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_miembros).post(create_miembro))
        .route(
            "/:id",
            get(get_miembro).put(update_miembro).delete(delete_miembro),
        )
}

#[derive(Debug, Default, Validate)]
struct FormMiembro {
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    nombre: String,
    #[validate(length(min = 1, message = "La identidad es requerida"))]
    identidad: String,
    email: Option<String>,
    telefono: Option<String>,
    terminal_id: Option<i32>,
    foto: Option<Vec<u8>>,
}

#[derive(Debug, Deserialize, Validate)]
struct UpdateMiembroRequest {
    nombre: Option<String>,
    identidad: Option<String>,
    email: Option<String>,
    telefono: Option<String>,
    terminal_id: Option<i32>,
    activo: Option<bool>,
}

async fn parse_miembro_multipart(mut multipart: Multipart) -> Result<FormMiembro, AppError> {
    let error = |e| AppError::BadRequest(format!("Formulario inválido: {}", e));
    let mut form = FormMiembro::default();

    while let Some(field) = multipart.next_field().await.map_err(error)? {
        let campo = field.name().unwrap_or("").to_string();
        match campo.as_str() {
            "foto" => form.foto = Some(field.bytes().await.map_err(error)?.to_vec()),
            "nombre" => form.nombre = field.text().await.map_err(error)?,
            "identidad" => form.identidad = field.text().await.map_err(error)?,
            "email" => form.email = Some(field.text().await.map_err(error)?),
            "telefono" => form.telefono = Some(field.text().await.map_err(error)?),
            "terminal_id" => {
                form.terminal_id = Some(
                    field
                        .text()
                        .await
                        .map_err(error)?
                        .parse()
                        .map_err(|_| {
                            validation_error("terminal_id", "Debe ser un valor numérico")
                        })?,
                )
            }
            _ => {}
        }
    }

    Ok(form)
}

async fn get_miembros(State(state): State<AppState>) -> AppResult<Json<Vec<MiembroResponse>>> {
    let miembros = sqlx::query_as::<_, Miembro>("SELECT * FROM miembros ORDER BY creado_en DESC")
        .fetch_all(&state.pool)
        .await?;

    Ok(Json(miembros.into_iter().map(MiembroResponse::from).collect()))
}

async fn create_miembro(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<ApiResponse<MiembroResponse>>)> {
    let form = parse_miembro_multipart(multipart).await?;
    form.validate()?;

    let miembro = sqlx::query_as::<_, Miembro>(
        r#"
        INSERT INTO miembros (nombre, identidad, email, telefono, terminal_id, foto)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(form.nombre)
    .bind(form.identidad)
    .bind(form.email)
    .bind(form.telefono)
    .bind(form.terminal_id)
    .bind(form.foto)
    .fetch_one(&state.pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "Miembro creado exitosamente",
            miembro.into(),
        )),
    ))
}

async fn get_miembro(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MiembroResponse>> {
    let miembro = sqlx::query_as::<_, Miembro>("SELECT * FROM miembros WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Miembro no encontrado".to_string()))?;

    Ok(Json(miembro.into()))
}

async fn update_miembro(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateMiembroRequest>,
) -> AppResult<Json<ApiResponse<MiembroResponse>>> {
    request.validate()?;

    let miembro = sqlx::query_as::<_, Miembro>(
        r#"
        UPDATE miembros
        SET nombre = COALESCE($2, nombre),
            identidad = COALESCE($3, identidad),
            email = COALESCE($4, email),
            telefono = COALESCE($5, telefono),
            terminal_id = COALESCE($6, terminal_id),
            activo = COALESCE($7, activo)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(request.nombre)
    .bind(request.identidad)
    .bind(request.email)
    .bind(request.telefono)
    .bind(request.terminal_id)
    .bind(request.activo)
    .fetch_optional(&state.pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Miembro no encontrado".to_string()))?;

    Ok(Json(ApiResponse::new(
        "Miembro actualizado exitosamente",
        miembro.into(),
    )))
}

async fn delete_miembro(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM miembros WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Miembro no encontrado".to_string()));
    }

    Ok(Json(json!({
        "message": "Miembro eliminado exitosamente",
        "data": null
    })))
}
