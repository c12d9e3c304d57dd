use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Fila de la tabla `billeteras`: asignación de combustible por vehículo
/// sobre un período configurable (1/7/15/30 días).
#[derive(Debug, sqlx::FromRow)]
pub struct Billetera {
    pub id: i32,
    pub vehiculo_id: i32,
    pub periodo_dias: i32,
    pub galones_totales: Decimal,
    pub galones_disponibles: Decimal,
    pub galones_consumidos: Decimal,
    pub odometro: Decimal,
    pub actualizado_en: Option<DateTime<Utc>>,
    pub creado_en: DateTime<Utc>,
}

/// Fila de auditoría insertada por cada billetera reiniciada
#[derive(Debug, sqlx::FromRow, serde::Serialize)]
pub struct ReinicioBilletera {
    pub id: i32,
    pub billetera_id: i32,
    pub vehiculo_id: i32,
    pub canal_id: Option<i32>,
    pub subcanal_id: Option<i32>,
    pub usuario_id: i32,
    pub fecha: DateTime<Utc>,
}

/// Fila de la tabla `transacciones_flota`
#[derive(Debug, sqlx::FromRow, serde::Serialize)]
pub struct TransaccionFlota {
    pub id: i32,
    pub billetera_id: i32,
    pub vehiculo_id: i32,
    pub galones: Decimal,
    pub tipo: String,
    pub creado_en: DateTime<Utc>,
}
