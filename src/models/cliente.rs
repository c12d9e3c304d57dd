use chrono::{DateTime, Utc};

/// Fila de la tabla `clientes`
#[derive(Debug, sqlx::FromRow)]
pub struct Cliente {
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
    pub logo: Option<Vec<u8>>,
    pub activo: bool,
    pub creado_en: DateTime<Utc>,
}
