use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fila de la tabla `centros_costo`
#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct CentroCosto {
    pub id: i32,
    pub nombre: String,
    pub codigo: Option<String>,
    pub empresa_id: i32,
    pub activo: bool,
    pub creado_en: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCentroCostoRequest {
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub nombre: String,
    pub codigo: Option<String>,
    pub empresa_id: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCentroCostoRequest {
    pub nombre: Option<String>,
    pub codigo: Option<String>,
    pub empresa_id: Option<i32>,
    pub activo: Option<bool>,
}
