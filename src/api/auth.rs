//! Inicio y cierre de sesión
//!
//! El login verifica credenciales con bcrypt y emite el token de sesión
//! firmado, que viaja como cookie `sesion` y también en el cuerpo para
//! clientes de API.

use axum::{
    extract::State,
    http::header,
    response::AppendHeaders,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use validator::Validate;

use crate::dto::ApiResponse;
use crate::middleware::sesion::UsuarioSesion;
use crate::models::usuario::{LoginRequest, Usuario, UsuarioResponse};
use crate::services::sesion_service;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<(
    AppendHeaders<[(header::HeaderName, String); 1]>,
    Json<ApiResponse<serde_json::Value>>,
)> {
    request.validate()?;

    let usuario =
        sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE email = $1 AND activo = TRUE")
            .bind(&request.email)
            .fetch_optional(&state.pool)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

    let valida = bcrypt::verify(&request.password, &usuario.password_hash)
        .map_err(|e| AppError::Internal(format!("Error verificando credenciales: {}", e)))?;
    if !valida {
        return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
    }

    let token = sesion_service::generar_token(
        &usuario,
        &state.config.session_secret,
        state.config.session_hours,
    )?;

    log::info!("Sesión iniciada para usuario {}", usuario.id);

    let cookie = format!(
        "sesion={}; HttpOnly; Path=/; SameSite=Lax; Max-Age={}",
        token,
        state.config.session_hours * 3600
    );

    Ok((
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Json(ApiResponse::new(
            "Sesión iniciada exitosamente",
            json!({
                "token": token,
                "usuario": UsuarioResponse::from(usuario),
            }),
        )),
    ))
}

async fn logout() -> (
    AppendHeaders<[(header::HeaderName, String); 1]>,
    Json<serde_json::Value>,
) {
    let cookie = "sesion=; HttpOnly; Path=/; Max-Age=0".to_string();
    (
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Json(json!({
            "message": "Sesión cerrada exitosamente",
            "data": null
        })),
    )
}

async fn me(usuario: UsuarioSesion) -> Json<serde_json::Value> {
    Json(json!({
        "id": usuario.id,
        "nombre": usuario.nombre,
        "email": usuario.email,
        "num_telefono": usuario.num_telefono,
    }))
}
