use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Fila de la tabla `transacciones`
#[derive(Debug, sqlx::FromRow)]
pub struct Transaccion {
    pub id: i32,
    pub tarjeta_id: i32,
    pub terminal_id: i32,
    pub turno_id: Option<i32>,
    pub combustible_id: i32,
    pub galones: Decimal,
    pub monto: Decimal,
    pub moneda_id: i32,
    pub odometro: Option<Decimal>,
    pub creado_en: DateTime<Utc>,
}
