use chrono::{DateTime, Utc};
use serde::Serialize;

/// Fila de la tabla `miembros`: operador del programa de lealtad
#[derive(Debug, sqlx::FromRow)]
pub struct Miembro {
    pub id: i32,
    pub nombre: String,
    pub identidad: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub terminal_id: Option<i32>,
    pub foto: Option<Vec<u8>>,
    pub activo: bool,
    pub creado_en: DateTime<Utc>,
}

/// Miembro con la foto codificada en base64 para JSON
#[derive(Debug, Serialize)]
pub struct MiembroResponse {
    pub id: i32,
    pub nombre: String,
    pub identidad: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub terminal_id: Option<i32>,
    pub foto: Option<String>,
    pub activo: bool,
    pub creado_en: DateTime<Utc>,
}

impl From<Miembro> for MiembroResponse {
    fn from(m: Miembro) -> Self {
        use base64::Engine;
        Self {
            id: m.id,
            nombre: m.nombre,
            identidad: m.identidad,
            email: m.email,
            telefono: m.telefono,
            terminal_id: m.terminal_id,
            foto: m
                .foto
                .map(|b| base64::engine::general_purpose::STANDARD.encode(b)),
            activo: m.activo,
            creado_en: m.creado_en,
        }
    }
}
