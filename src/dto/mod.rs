pub mod billetera_dto;
pub mod cliente_dto;
pub mod tarjeta_dto;
pub mod transaccion_dto;
pub mod vehiculo_dto;

use serde::Serialize;

/// Sobre de respuesta de las mutaciones: `{ message, data }`.
/// Los GET devuelven el arreglo u objeto directamente.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}
