//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. La única variable
//! obligatoria es `DATABASE_URL` (ver `config::database`); el resto tiene
//! valores por defecto razonables para desarrollo.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub session_secret: String,
    pub session_hours: i64,
    pub cors_origins: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            session_secret: env::var("SESSION_SECRET")
                .unwrap_or_else(|_| "flota-admin-secreto-desarrollo".to_string()),
            session_hours: env::var("SESSION_HOURS")
                .unwrap_or_else(|_| "8".to_string())
                .parse()
                .expect("SESSION_HOURS must be a valid number"),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_default(),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
