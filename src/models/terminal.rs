use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fila de la tabla `terminales`
#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct Terminal {
    pub id: i32,
    pub nombre: String,
    pub codigo: String,
    pub empresa_id: Option<i32>,
    pub direccion: Option<String>,
    pub activo: bool,
    pub creado_en: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTerminalRequest {
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub nombre: String,
    #[validate(length(min = 1, message = "El código es requerido"))]
    pub codigo: String,
    pub empresa_id: Option<i32>,
    pub direccion: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTerminalRequest {
    pub nombre: Option<String>,
    pub codigo: Option<String>,
    pub empresa_id: Option<i32>,
    pub direccion: Option<String>,
    pub activo: Option<bool>,
}
