//! Sesión de usuario
//!
//! Extractor del usuario autenticado a partir del token de sesión (cookie
//! `sesion` o header Authorization Bearer) y capa de redirección para
//! navegaciones de navegador sobre las páginas protegidas.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::services::sesion_service::{self, SesionClaims};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Prefijos de páginas que requieren sesión iniciada en el navegador.
/// Una página nueva requiere agregar su prefijo aquí.
const PREFIJOS_PROTEGIDOS: [&str; 9] = [
    "/clientes",
    "/vehiculos",
    "/tarjetas",
    "/transacciones",
    "/billeteras",
    "/descuentos",
    "/terminales",
    "/miembros",
    "/permisos",
];

/// Usuario autenticado extraído del token de sesión
#[derive(Debug, Clone)]
pub struct UsuarioSesion {
    pub id: i32,
    pub nombre: String,
    pub email: String,
    pub num_telefono: Option<String>,
}

impl From<SesionClaims> for UsuarioSesion {
    fn from(claims: SesionClaims) -> Self {
        Self {
            id: claims.sub,
            nombre: claims.nombre,
            email: claims.email,
            num_telefono: claims.num_telefono,
        }
    }
}

/// Buscar el token de sesión en los headers: primero Authorization Bearer,
/// luego la cookie `sesion`.
pub fn token_de_headers(headers: &HeaderMap) -> Option<String> {
    if let Some(valor) = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    {
        if let Ok(token) = sesion_service::extraer_token_de_header(valor) {
            return Some(token.to_string());
        }
    }

    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies
        .split(';')
        .map(|c| c.trim())
        .find_map(|c| c.strip_prefix("sesion=").map(|v| v.to_string()))
}

#[axum::async_trait]
impl FromRequestParts<AppState> for UsuarioSesion {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = token_de_headers(&parts.headers)
            .ok_or_else(|| AppError::Unauthorized("Sesión no iniciada".to_string()))?;

        let claims = sesion_service::verificar_token(&token, &state.config.session_secret)?;
        Ok(claims.into())
    }
}

/// Capa de redirección para navegaciones de navegador: sin sesión sobre una
/// página protegida se redirige a /login; con sesión sobre /login se
/// redirige al inicio. Las llamadas de API (sin Accept: text/html) pasan.
pub async fn sesion_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let es_navegacion = request
        .headers()
        .get(header::ACCEPT)
        .and_then(|h| h.to_str().ok())
        .map(|a| a.contains("text/html"))
        .unwrap_or(false);

    if !es_navegacion {
        return next.run(request).await;
    }

    let path = request.uri().path().to_string();
    let con_sesion = token_de_headers(request.headers())
        .and_then(|t| sesion_service::verificar_token(&t, &state.config.session_secret).ok())
        .is_some();

    if path == "/login" && con_sesion {
        return Redirect::to("/").into_response();
    }

    let protegida = PREFIJOS_PROTEGIDOS.iter().any(|p| path.starts_with(p));
    if protegida && !con_sesion {
        return Redirect::to("/login").into_response();
    }

    next.run(request).await
}
