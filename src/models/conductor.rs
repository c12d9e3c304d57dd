use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fila de la tabla `conductores`
#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct Conductor {
    pub id: i32,
    pub cliente_id: i32,
    pub nombre: String,
    pub identidad: String,
    pub licencia: Option<String>,
    pub telefono: Option<String>,
    pub activo: bool,
    pub creado_en: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateConductorRequest {
    pub cliente_id: i32,
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub nombre: String,
    #[validate(length(min = 1, message = "La identidad es requerida"))]
    pub identidad: String,
    pub licencia: Option<String>,
    pub telefono: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateConductorRequest {
    pub nombre: Option<String>,
    pub identidad: Option<String>,
    pub licencia: Option<String>,
    pub telefono: Option<String>,
    pub activo: Option<bool>,
}
