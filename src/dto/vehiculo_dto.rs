use crate::models::vehiculo::Vehiculo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehiculoRequest {
    #[validate(range(min = 1, message = "El cliente es requerido"))]
    pub cliente_id: i32,
    #[validate(length(min = 1, message = "La placa es requerida"))]
    pub placa: String,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub anio: Option<i32>,
    pub combustible_id: Option<i32>,
    pub odometro: Option<f64>,
}

// Request para actualizar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehiculoRequest {
    pub placa: Option<String>,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub anio: Option<i32>,
    pub combustible_id: Option<i32>,
    pub odometro: Option<f64>,
    pub activo: Option<bool>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehiculoResponse {
    pub id: i32,
    pub cliente_id: i32,
    pub placa: String,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub anio: Option<i32>,
    pub combustible_id: Option<i32>,
    pub odometro: f64,
    pub activo: bool,
    pub creado_en: DateTime<Utc>,
}

impl From<Vehiculo> for VehiculoResponse {
    fn from(v: Vehiculo) -> Self {
        Self {
            id: v.id,
            cliente_id: v.cliente_id,
            placa: v.placa,
            marca: v.marca,
            modelo: v.modelo,
            anio: v.anio,
            combustible_id: v.combustible_id,
            odometro: v.odometro.to_string().parse().unwrap_or(0.0),
            activo: v.activo,
            creado_en: v.creado_en,
        }
    }
}
