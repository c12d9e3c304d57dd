//! Tablas de catálogo: clasificaciones simples referenciadas por el resto
//! del esquema (países, estados, monedas, unidades, canales, subcanales y
//! tipos de tarjeta).

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct Pais {
    pub id: i32,
    pub nombre: String,
}

#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct Estado {
    pub id: i32,
    pub nombre: String,
    pub pais_id: i32,
}

#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct Moneda {
    pub id: i32,
    pub nombre: String,
    pub codigo: String,
    pub simbolo: String,
}

#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct UnidadMedida {
    pub id: i32,
    pub nombre: String,
    pub abreviatura: String,
}

#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct Canal {
    pub id: i32,
    pub nombre: String,
}

#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct Subcanal {
    pub id: i32,
    pub nombre: String,
    pub canal_id: i32,
}

#[derive(Debug, sqlx::FromRow, Serialize)]
pub struct TipoTarjeta {
    pub id: i32,
    pub nombre: String,
    pub descripcion: Option<String>,
}

/// Alta/edición de catálogos con solo nombre
#[derive(Debug, Deserialize, Validate)]
pub struct NombreRequest {
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub nombre: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEstadoRequest {
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub nombre: String,
    pub pais_id: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMonedaRequest {
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub nombre: String,
    #[validate(length(min = 1, message = "El código es requerido"))]
    pub codigo: String,
    #[validate(length(min = 1, message = "El símbolo es requerido"))]
    pub simbolo: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUnidadRequest {
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub nombre: String,
    #[validate(length(min = 1, message = "La abreviatura es requerida"))]
    pub abreviatura: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubcanalRequest {
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub nombre: String,
    pub canal_id: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTipoTarjetaRequest {
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub nombre: String,
    pub descripcion: Option<String>,
}
