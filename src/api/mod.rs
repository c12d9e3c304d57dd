//! Recursos de handler directo: módulos que emiten su SQL contra el pool sin
//! capa de repositorio, para los recursos simples del back office.

pub mod auth;
pub mod catalogos;
pub mod centros_costo;
pub mod combustibles;
pub mod conductores;
pub mod descuentos;
pub mod empresas;
pub mod miembros;
pub mod permisos;
pub mod puntos;
pub mod terminales;
pub mod turnos;
pub mod usuarios;

use crate::state::AppState;
use axum::Router;

pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth::router())
        .nest("/api/usuarios", usuarios::router())
        .nest("/api/conductores", conductores::router())
        .nest("/api/terminales", terminales::router())
        .nest("/api/empresas", empresas::router())
        .nest("/api/centros-costo", centros_costo::router())
        .nest("/api/miembros", miembros::router())
        .nest("/api/turnos", turnos::router())
        .nest("/api/descuentos", descuentos::router())
        .nest("/api/combustibles", combustibles::router())
        .nest("/api/puntos", puntos::router())
        .nest("/api/permisos", permisos::router())
        .merge(catalogos::router())
}
