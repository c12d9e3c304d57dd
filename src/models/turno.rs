use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fila de la tabla `turnos`: ventana de tiempo de una terminal con su
/// miembro operador, usada para agrupar transacciones.
#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct Turno {
    pub id: i32,
    pub terminal_id: i32,
    pub miembro_id: i32,
    pub inicio: DateTime<Utc>,
    pub fin: Option<DateTime<Utc>>,
    pub abierto: bool,
    pub creado_en: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AbrirTurnoRequest {
    pub terminal_id: i32,
    pub miembro_id: i32,
    pub inicio: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CerrarTurnoRequest {
    pub fin: DateTime<Utc>,
}
