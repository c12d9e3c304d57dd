use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fila de la tabla `combustibles`
#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct Combustible {
    pub id: i32,
    pub nombre: String,
    pub unidad_medida_id: i32,
    pub activo: bool,
}

/// Fila de la tabla `precios_combustible`: precio por moneda con vigencia
#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct PrecioCombustible {
    pub id: i32,
    pub combustible_id: i32,
    pub moneda_id: i32,
    pub precio: Decimal,
    pub vigente_desde: DateTime<Utc>,
    pub creado_por: Option<i32>,
    pub creado_en: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCombustibleRequest {
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub nombre: String,
    pub unidad_medida_id: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCombustibleRequest {
    pub nombre: Option<String>,
    pub unidad_medida_id: Option<i32>,
    pub activo: Option<bool>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePrecioRequest {
    pub moneda_id: i32,
    pub precio: f64,
    pub vigente_desde: DateTime<Utc>,
}
