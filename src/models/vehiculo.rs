use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Fila de la tabla `vehiculos`
#[derive(Debug, sqlx::FromRow)]
pub struct Vehiculo {
    pub id: i32,
    pub cliente_id: i32,
    pub placa: String,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub anio: Option<i32>,
    pub combustible_id: Option<i32>,
    pub odometro: Decimal,
    pub activo: bool,
    pub creado_en: DateTime<Utc>,
}
