use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fila de la tabla `empresas`
#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct Empresa {
    pub id: i32,
    pub nombre: String,
    pub rtn: Option<String>,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    pub activo: bool,
    pub creado_en: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEmpresaRequest {
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub nombre: String,
    pub rtn: Option<String>,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEmpresaRequest {
    pub nombre: Option<String>,
    pub rtn: Option<String>,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    pub activo: Option<bool>,
}
