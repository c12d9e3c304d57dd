use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fila de la tabla `usuarios`
#[derive(Debug, sqlx::FromRow)]
pub struct Usuario {
    pub id: i32,
    pub nombre: String,
    pub email: String,
    pub num_telefono: Option<String>,
    pub password_hash: String,
    pub es_admin: bool,
    pub activo: bool,
    pub creado_en: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "El email no es válido"))]
    pub email: String,
    #[validate(length(min = 1, message = "La contraseña es requerida"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUsuarioRequest {
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub nombre: String,
    #[validate(email(message = "El email no es válido"))]
    pub email: String,
    pub num_telefono: Option<String>,
    #[validate(length(min = 8, message = "La contraseña debe tener al menos 8 caracteres"))]
    pub password: String,
    #[serde(default)]
    pub es_admin: bool,
}

/// Usuario sin campos sensibles, para respuestas
#[derive(Debug, Serialize)]
pub struct UsuarioResponse {
    pub id: i32,
    pub nombre: String,
    pub email: String,
    pub num_telefono: Option<String>,
    pub es_admin: bool,
    pub activo: bool,
    pub creado_en: DateTime<Utc>,
}

impl From<Usuario> for UsuarioResponse {
    fn from(u: Usuario) -> Self {
        Self {
            id: u.id,
            nombre: u.nombre,
            email: u.email,
            num_telefono: u.num_telefono,
            es_admin: u.es_admin,
            activo: u.activo,
            creado_en: u.creado_en,
        }
    }
}
