use crate::models::transaccion::Transaccion;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// Request para registrar una transacción
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTransaccionRequest {
    #[validate(range(min = 1, message = "La tarjeta es requerida"))]
    pub tarjeta_id: i32,
    #[validate(range(min = 1, message = "La terminal es requerida"))]
    pub terminal_id: i32,
    pub turno_id: Option<i32>,
    #[validate(range(min = 1, message = "El combustible es requerido"))]
    pub combustible_id: i32,
    pub galones: f64,
    pub monto: f64,
    #[validate(range(min = 1, message = "La moneda es requerida"))]
    pub moneda_id: i32,
    pub odometro: Option<f64>,
}

// Request para actualizar una transacción
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTransaccionRequest {
    pub turno_id: Option<i32>,
    pub odometro: Option<f64>,
}

// Response de transacción
#[derive(Debug, Serialize)]
pub struct TransaccionResponse {
    pub id: i32,
    pub tarjeta_id: i32,
    pub terminal_id: i32,
    pub turno_id: Option<i32>,
    pub combustible_id: i32,
    pub galones: f64,
    pub monto: f64,
    pub moneda_id: i32,
    pub odometro: Option<f64>,
    pub creado_en: DateTime<Utc>,
}

impl From<Transaccion> for TransaccionResponse {
    fn from(t: Transaccion) -> Self {
        Self {
            id: t.id,
            tarjeta_id: t.tarjeta_id,
            terminal_id: t.terminal_id,
            turno_id: t.turno_id,
            combustible_id: t.combustible_id,
            galones: t.galones.to_string().parse().unwrap_or(0.0),
            monto: t.monto.to_string().parse().unwrap_or(0.0),
            moneda_id: t.moneda_id,
            odometro: t.odometro.map(|d| d.to_string().parse().unwrap_or(0.0)),
            creado_en: t.creado_en,
        }
    }
}
