//! Tokens de sesión firmados
//!
//! La sesión viaja como token HS256 firmado (cookie `sesion` o header
//! Authorization Bearer) con los datos del usuario, expiración y un jti
//! aleatorio. El servidor nunca confía en contenido sin firma.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::usuario::Usuario;
use crate::utils::errors::AppError;

/// Claims del token de sesión
#[derive(Debug, Serialize, Deserialize)]
pub struct SesionClaims {
    pub sub: i32,
    pub nombre: String,
    pub email: String,
    pub num_telefono: Option<String>,
    pub jti: Uuid,
    pub exp: usize,
    pub iat: usize,
}

/// Generar un token de sesión para un usuario
pub fn generar_token(usuario: &Usuario, secret: &str, horas: i64) -> Result<String, AppError> {
    let ahora = chrono::Utc::now();
    let expira = ahora + chrono::Duration::hours(horas);

    let claims = SesionClaims {
        sub: usuario.id,
        nombre: usuario.nombre.clone(),
        email: usuario.email.clone(),
        num_telefono: usuario.num_telefono.clone(),
        jti: Uuid::new_v4(),
        exp: expira.timestamp() as usize,
        iat: ahora.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| AppError::Internal(format!("Error generando token de sesión: {}", e)))
}

/// Verificar y decodificar un token de sesión
pub fn verificar_token(token: &str, secret: &str) -> Result<SesionClaims, AppError> {
    let token_data = decode::<SesionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized("Sesión inválida o expirada".to_string()))?;

    Ok(token_data.claims)
}

/// Extraer el token del header Authorization
pub fn extraer_token_de_header(auth_header: &str) -> Result<&str, AppError> {
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Header Authorization inválido".to_string()))?;

    if token.is_empty() {
        return Err(AppError::Unauthorized(
            "Token de sesión vacío".to_string(),
        ));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn usuario_de_prueba() -> Usuario {
        Usuario {
            id: 7,
            nombre: "Ana Díaz".to_string(),
            email: "ana@example.com".to_string(),
            num_telefono: Some("999".to_string()),
            password_hash: "hash".to_string(),
            es_admin: false,
            activo: true,
            creado_en: Utc::now(),
        }
    }

    #[test]
    fn test_token_ida_y_vuelta() {
        let usuario = usuario_de_prueba();
        let token = generar_token(&usuario, "secreto", 8).unwrap();
        let claims = verificar_token(&token, "secreto").unwrap();

        assert_eq!(claims.sub, 7);
        assert_eq!(claims.nombre, "Ana Díaz");
        assert_eq!(claims.email, "ana@example.com");
        assert_eq!(claims.num_telefono.as_deref(), Some("999"));
    }

    #[test]
    fn test_token_con_otro_secreto_falla() {
        let usuario = usuario_de_prueba();
        let token = generar_token(&usuario, "secreto", 8).unwrap();
        assert!(verificar_token(&token, "otro-secreto").is_err());
    }

    #[test]
    fn test_extraer_token_de_header() {
        assert_eq!(extraer_token_de_header("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(extraer_token_de_header("Basic abc").is_err());
        assert!(extraer_token_de_header("Bearer ").is_err());
    }
}
