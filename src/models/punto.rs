use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fila del libro de puntos de lealtad por miembro
#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct Punto {
    pub id: i32,
    pub miembro_id: i32,
    pub transaccion_id: Option<i32>,
    pub puntos: i32,
    pub motivo: Option<String>,
    pub creado_en: DateTime<Utc>,
}

/// Fila de la tabla `canjes`
#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct Canje {
    pub id: i32,
    pub miembro_id: i32,
    pub puntos: i32,
    pub descripcion: String,
    pub creado_en: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePuntoRequest {
    pub miembro_id: i32,
    pub transaccion_id: Option<i32>,
    #[validate(range(min = 1, message = "Los puntos deben ser positivos"))]
    pub puntos: i32,
    pub motivo: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCanjeRequest {
    pub miembro_id: i32,
    #[validate(range(min = 1, message = "Los puntos deben ser positivos"))]
    pub puntos: i32,
    #[validate(length(min = 1, message = "La descripción es requerida"))]
    pub descripcion: String,
}
