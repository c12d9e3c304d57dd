use crate::models::tarjeta::Tarjeta;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// Request para emitir una tarjeta; el número lo genera el servicio de
// numeración, nunca lo envía el cliente.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTarjetaRequest {
    #[validate(range(min = 1, message = "El tipo de tarjeta es requerido"))]
    pub tipo_tarjeta_id: i32,
    #[validate(range(min = 1, message = "El cliente es requerido"))]
    pub cliente_id: i32,
    pub vehiculo_id: Option<i32>,
    pub conductor_id: Option<i32>,
    pub canal_id: Option<i32>,
    pub subcanal_id: Option<i32>,
}

// Request para actualizar una tarjeta
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTarjetaRequest {
    pub tipo_tarjeta_id: Option<i32>,
    pub vehiculo_id: Option<i32>,
    pub conductor_id: Option<i32>,
    pub canal_id: Option<i32>,
    pub subcanal_id: Option<i32>,
    pub activa: Option<bool>,
}

// Response de tarjeta
#[derive(Debug, Serialize)]
pub struct TarjetaResponse {
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

impl From<Tarjeta> for TarjetaResponse {
    fn from(t: Tarjeta) -> Self {
        Self {
            id: t.id,
            numero: t.numero,
            correlativo: t.correlativo,
            tipo_tarjeta_id: t.tipo_tarjeta_id,
            cliente_id: t.cliente_id,
            vehiculo_id: t.vehiculo_id,
            conductor_id: t.conductor_id,
            canal_id: t.canal_id,
            subcanal_id: t.subcanal_id,
            activa: t.activa,
            creado_en: t.creado_en,
        }
    }
}
