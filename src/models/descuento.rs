use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fila de la tabla `descuentos`
#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct Descuento {
    pub id: i32,
    pub nombre: String,
    pub tipo: String,
    pub valor: Decimal,
    pub combustible_id: Option<i32>,
    pub cliente_id: Option<i32>,
    pub creado_por: Option<i32>,
    pub activo: bool,
    pub creado_en: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDescuentoRequest {
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub nombre: String,
    /// 'porcentaje' o 'monto'
    #[validate(length(min = 1, message = "El tipo es requerido"))]
    pub tipo: String,
    pub valor: f64,
    pub combustible_id: Option<i32>,
    pub cliente_id: Option<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDescuentoRequest {
    pub nombre: Option<String>,
    pub tipo: Option<String>,
    pub valor: Option<f64>,
    pub combustible_id: Option<i32>,
    pub cliente_id: Option<i32>,
    pub activo: Option<bool>,
}
