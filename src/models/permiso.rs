use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fila de permiso explícito (usuario, ruta estática)
#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct Permiso {
    pub id: i32,
    pub usuario_id: i32,
    pub ruta: String,
    pub permitido: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePermisoRequest {
    pub usuario_id: i32,
    #[validate(length(min = 1, message = "La ruta es requerida"))]
    pub ruta: String,
    #[serde(default = "default_permitido")]
    pub permitido: bool,
}

fn default_permitido() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePermisoRequest {
    pub permitido: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct VerificarPermisoRequest {
    pub usuario_id: i32,
    #[validate(length(min = 1, message = "La ruta es requerida"))]
    pub ruta: String,
}

#[derive(Debug, Serialize)]
pub struct VerificarPermisoResponse {
    pub permitido: bool,
    /// Ruta estática contra la que se evaluó el permiso
    pub ruta: String,
}
