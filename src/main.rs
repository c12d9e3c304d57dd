mod api;
mod config;
mod controllers;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{middleware as axum_middleware, response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::database::DatabaseConfig;
use config::environment::EnvironmentConfig;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use middleware::sesion::sesion_gate;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("⛽ Flota Admin - Back office de tarjetas de combustible");
    info!("======================================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let pool = match DatabaseConfig::default().create_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let app_state = AppState::new(pool, config.clone());

    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(&config.cors_origins)
    };

    let app = Router::new()
        .route("/test", get(test_endpoint))
        // Recursos con capa MVC
        .nest(
            "/api/clientes",
            routes::cliente_routes::create_cliente_router(),
        )
        .nest(
            "/api/tarjetas",
            routes::tarjeta_routes::create_tarjeta_router(),
        )
        .nest(
            "/api/vehiculos",
            routes::vehiculo_routes::create_vehiculo_router(),
        )
        .nest(
            "/api/billeteras",
            routes::billetera_routes::create_billetera_router(),
        )
        .nest(
            "/api/transacciones",
            routes::transaccion_routes::create_transaccion_router(),
        )
        // Recursos de handler directo
        .merge(api::create_api_router())
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            sesion_gate,
        ))
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("🏢 Clientes:");
    info!("   POST /api/clientes - Crear cliente (multipart con logo)");
    info!("   GET  /api/clientes - Listar clientes (paginado)");
    info!("   GET  /api/clientes/:id - Obtener cliente");
    info!("   PUT  /api/clientes/:id - Actualizar cliente");
    info!("   DELETE /api/clientes/:id - Eliminar cliente");
    info!("💳 Tarjetas:");
    info!("   POST /api/tarjetas - Emitir tarjeta (número generado)");
    info!("   GET  /api/tarjetas - Listar tarjetas");
    info!("🚗 Vehículos:");
    info!("   POST /api/vehiculos - Crear vehículo");
    info!("   GET  /api/vehiculos - Listar vehículos");
    info!("👛 Billeteras de flota:");
    info!("   POST /api/billeteras - Crear billetera");
    info!("   POST /api/billeteras/reiniciar - Reiniciar período (requiere sesión)");
    info!("🧾 Transacciones:");
    info!("   POST /api/transacciones - Registrar transacción");
    info!("   GET  /api/transacciones - Listar transacciones (paginado)");
    info!("🔑 Autenticación:");
    info!("   POST /api/auth/login - Iniciar sesión");
    info!("   POST /api/auth/logout - Cerrar sesión");
    info!("   GET  /api/auth/me - Usuario actual");
    info!("🛂 Permisos:");
    info!("   POST /api/permisos/verificar - Verificar acceso a una ruta");
    info!("📋 Catálogos: /api/paises /api/estados /api/monedas /api/unidades-medida");
    info!("             /api/canales /api/subcanales /api/tipos-tarjeta");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Back office de flota funcionando correctamente",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
