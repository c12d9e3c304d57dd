//! Utilidades de validación
//!
//! Funciones helper de validación de datos compartidas por los handlers,
//! complementarias a los derives de `validator` en los requests.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use validator::ValidationError;

lazy_static! {
    static ref RE_NUMERO_TARJETA: Regex = Regex::new(r"^\d{8}$").unwrap();
    static ref RE_TELEFONO: Regex = Regex::new(r"^[0-9+\-\s]{3,20}$").unwrap();
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar longitud mínima y máxima
pub fn validate_length(value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        let mut error = ValidationError::new("length");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &len);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de email
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !value.contains('@') || !value.contains('.') {
        let mut error = ValidationError::new("email");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de teléfono
pub fn validate_telefono(value: &str) -> Result<(), ValidationError> {
    if !RE_TELEFONO.is_match(value) {
        let mut error = ValidationError::new("telefono");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de número de tarjeta: exactamente 8 dígitos
pub fn validate_numero_tarjeta(value: &str) -> Result<(), ValidationError> {
    if !RE_NUMERO_TARJETA.is_match(value) {
        let mut error = ValidationError::new("numero_tarjeta");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"8 dígitos".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que el período de una billetera sea uno de los soportados
pub fn validate_periodo(value: i32) -> Result<(), ValidationError> {
    const PERIODOS: [i32; 4] = [1, 7, 15, 30];
    if !PERIODOS.contains(&value) {
        let mut error = ValidationError::new("periodo");
        error.add_param("value".into(), &value);
        error.add_param("allowed".into(), &"1, 7, 15, 30".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("hola").is_ok());
        assert!(validate_not_empty("   ").is_err());
        assert!(validate_not_empty("").is_err());
    }

    #[test]
    fn test_validate_length() {
        let value = "test";
        assert!(validate_length(value, 1, 10).is_ok());
        assert!(validate_length(value, 5, 10).is_err());
        assert!(validate_length(value, 1, 3).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("invalido").is_err());
        assert!(validate_email("test@").is_err());
    }

    #[test]
    fn test_validate_telefono() {
        assert!(validate_telefono("999").is_ok());
        assert!(validate_telefono("+504 9999-9999").is_ok());
        assert!(validate_telefono("ab").is_err());
    }

    #[test]
    fn test_validate_numero_tarjeta() {
        assert!(validate_numero_tarjeta("12340001").is_ok());
        assert!(validate_numero_tarjeta("1234001").is_err());
        assert!(validate_numero_tarjeta("12 40001").is_err());
        assert!(validate_numero_tarjeta("123400012").is_err());
    }

    #[test]
    fn test_validate_periodo() {
        assert!(validate_periodo(1).is_ok());
        assert!(validate_periodo(7).is_ok());
        assert!(validate_periodo(15).is_ok());
        assert!(validate_periodo(30).is_ok());
        assert!(validate_periodo(10).is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(5).is_ok());
        assert!(validate_positive(0).is_err());
        assert!(validate_positive(-5).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative(0).is_ok());
        assert!(validate_non_negative(-1).is_err());
    }
}
