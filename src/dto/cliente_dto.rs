use crate::models::cliente::Cliente;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// Request para crear un cliente. Llega como formulario multipart: los campos
// de texto se vuelcan aquí y el archivo `logo` se maneja aparte.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateClienteRequest {
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub nombre: String,
    #[validate(range(min = 1, message = "El país es requerido"))]
    pub pais: i32,
    #[validate(range(min = 1, message = "El estado es requerido"))]
    pub estado: i32,
    #[validate(length(min = 1, message = "La ciudad es requerida"))]
    pub ciudad: String,
    #[validate(email(message = "El email no es válido"))]
    pub email: String,
    #[validate(length(min = 1, message = "El teléfono es requerido"))]
    pub telefono: String,
    #[validate(length(min = 1, message = "El NFI es requerido"))]
    pub nfi: String,
    pub canal_id: Option<i32>,
    pub subcanal_id: Option<i32>,
}

// Request para actualizar un cliente
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateClienteRequest {
    pub nombre: Option<String>,
    pub pais: Option<i32>,
    pub estado: Option<i32>,
    pub ciudad: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub nfi: Option<String>,
    pub canal_id: Option<i32>,
    pub subcanal_id: Option<i32>,
    pub activo: Option<bool>,
}

// Response de cliente; el logo viaja en base64 dentro del JSON
#[derive(Debug, Serialize)]
pub struct ClienteResponse {
    pub id: i32,
    pub nombre: String,
    pub pais: i32,
    pub estado: i32,
    pub ciudad: String,
    pub email: String,
    pub telefono: String,
    pub nfi: String,
    pub canal_id: Option<i32>,
    pub subcanal_id: Option<i32>,
    pub logo: Option<String>,
    pub activo: bool,
    pub creado_en: DateTime<Utc>,
}

impl From<Cliente> for ClienteResponse {
    fn from(c: Cliente) -> Self {
        Self {
            id: c.id,
            nombre: c.nombre,
            pais: c.pais,
            estado: c.estado,
            ciudad: c.ciudad,
            email: c.email,
            telefono: c.telefono,
            nfi: c.nfi,
            canal_id: c.canal_id,
            subcanal_id: c.subcanal_id,
            logo: c
                .logo
                .map(|b| base64::engine::general_purpose::STANDARD.encode(b)),
            activo: c.activo,
            creado_en: c.creado_en,
        }
    }
}
