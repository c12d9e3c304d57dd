//! Handlers de turnos
//!
//! Un turno es la ventana de tiempo de operación de una terminal con su
//! miembro operador; agrupa las transacciones registradas mientras está
//! abierto.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::dto::ApiResponse;
use crate::models::turno::{AbrirTurnoRequest, CerrarTurnoRequest, Turno};
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_turnos))
        .route("/abrir", post(abrir_turno))
        .route("/:id", get(get_turno).delete(delete_turno))
        .route("/:id/cerrar", put(cerrar_turno))
}

#[derive(Debug, Deserialize)]
struct Filtro {
    terminal_id: Option<i32>,
}

async fn get_turnos(
    State(state): State<AppState>,
    Query(filtro): Query<Filtro>,
) -> AppResult<Json<Vec<Turno>>> {
    let turnos = match filtro.terminal_id {
        Some(tid) => {
            sqlx::query_as::<_, Turno>(
                "SELECT * FROM turnos WHERE terminal_id = $1 ORDER BY inicio DESC",
            )
            .bind(tid)
            .fetch_all(&state.pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Turno>("SELECT * FROM turnos ORDER BY inicio DESC")
                .fetch_all(&state.pool)
                .await?
        }
    };

    Ok(Json(turnos))
}

async fn abrir_turno(
    State(state): State<AppState>,
    Json(request): Json<AbrirTurnoRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Turno>>)> {
    request.validate()?;

    // Una terminal no puede tener dos turnos abiertos a la vez
    let abierto: (bool,) = sqlx::query_as(
        "SELECT EXISTS(SELECT 1 FROM turnos WHERE terminal_id = $1 AND abierto = TRUE)",
    )
    .bind(request.terminal_id)
    .fetch_one(&state.pool)
    .await?;

    if abierto.0 {
        return Err(AppError::BadRequest(
            "La terminal ya tiene un turno abierto".to_string(),
        ));
    }

    let turno = sqlx::query_as::<_, Turno>(
        r#"
        INSERT INTO turnos (terminal_id, miembro_id, inicio)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(request.terminal_id)
    .bind(request.miembro_id)
    .bind(request.inicio)
    .fetch_one(&state.pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Turno abierto exitosamente", turno)),
    ))
}

async fn get_turno(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Json<Turno>> {
    let turno = sqlx::query_as::<_, Turno>("SELECT * FROM turnos WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Turno no encontrado".to_string()))?;

    Ok(Json(turno))
}

async fn cerrar_turno(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CerrarTurnoRequest>,
) -> AppResult<Json<ApiResponse<Turno>>> {
    request.validate()?;

    let turno = sqlx::query_as::<_, Turno>(
        r#"
        UPDATE turnos
        SET fin = $2, abierto = FALSE
        WHERE id = $1 AND abierto = TRUE
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(request.fin)
    .fetch_optional(&state.pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Turno abierto no encontrado".to_string()))?;

    Ok(Json(ApiResponse::new("Turno cerrado exitosamente", turno)))
}

async fn delete_turno(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM turnos WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Turno no encontrado".to_string()));
    }

    Ok(Json(json!({
        "message": "Turno eliminado exitosamente",
        "data": null
    })))
}
