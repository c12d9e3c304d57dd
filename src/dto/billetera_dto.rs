use crate::models::billetera::Billetera;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// Request para crear una billetera de flota
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBilleteraRequest {
    #[validate(range(min = 1, message = "El vehículo es requerido"))]
    pub vehiculo_id: i32,
    /// Período de la asignación en días: 1, 7, 15 o 30
    pub periodo_dias: i32,
    pub galones_totales: f64,
}

// Request para actualizar una billetera
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBilleteraRequest {
    pub periodo_dias: Option<i32>,
    pub galones_totales: Option<f64>,
    pub galones_disponibles: Option<f64>,
    pub galones_consumidos: Option<f64>,
    pub odometro: Option<f64>,
}

// Request del reinicio masivo de billeteras por vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct ResetBilleterasRequest {
    #[validate(length(min = 1, message = "Debe indicar al menos un vehículo"))]
    pub vehiculos: Vec<i32>,
    pub fecha: DateTime<Utc>,
}

// Response de billetera
#[derive(Debug, Serialize)]
pub struct BilleteraResponse {
    pub id: i32,
    pub vehiculo_id: i32,
    pub periodo_dias: i32,
    pub galones_totales: f64,
    pub galones_disponibles: f64,
    pub galones_consumidos: f64,
    pub odometro: f64,
    pub actualizado_en: Option<DateTime<Utc>>,
    pub creado_en: DateTime<Utc>,
}

impl From<Billetera> for BilleteraResponse {
    fn from(b: Billetera) -> Self {
        Self {
            id: b.id,
            vehiculo_id: b.vehiculo_id,
            periodo_dias: b.periodo_dias,
            galones_totales: b.galones_totales.to_string().parse().unwrap_or(0.0),
            galones_disponibles: b.galones_disponibles.to_string().parse().unwrap_or(0.0),
            galones_consumidos: b.galones_consumidos.to_string().parse().unwrap_or(0.0),
            odometro: b.odometro.to_string().parse().unwrap_or(0.0),
            actualizado_en: b.actualizado_en,
            creado_en: b.creado_en,
        }
    }
}
