use chrono::{DateTime, Utc};

/// Fila de la tabla `tarjetas`
///
/// `numero` son 8 dígitos: prefijo aleatorio de 4 + correlativo de 4 con
/// ceros a la izquierda. `correlativo` guarda el sufijo como entero para
/// ordenar la última emisión.
#[derive(Debug, sqlx::FromRow)]
pub struct Tarjeta {
    pub id: i32,
    pub numero: String,
    pub correlativo: i32,
    pub tipo_tarjeta_id: i32,
    pub cliente_id: i32,
    pub vehiculo_id: Option<i32>,
    pub conductor_id: Option<i32>,
    pub canal_id: Option<i32>,
    pub subcanal_id: Option<i32>,
    pub activa: bool,
    pub creado_en: DateTime<Utc>,
}
