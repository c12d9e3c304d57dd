//! Emisión de números de tarjeta
//!
//! Un número de tarjeta son 8 dígitos: un prefijo aleatorio de 4 generado una
//! vez por solicitud, seguido del correlativo secuencial de 4 con ceros a la
//! izquierda. El correlativo parte del último emitido; ante colisión se
//! incrementa y reintenta con tope de 100 intentos.
//!
//! No hay bloqueo entre solicitudes concurrentes: dos emisiones simultáneas
//! pueden calcular el mismo correlativo y solo la restricción UNIQUE de la
//! base lo detecta al insertar.

use crate::repositories::tarjeta_repository::TarjetaRepository;
use crate::utils::errors::AppError;
use rand::Rng;

/// Correlativo máximo representable en 4 dígitos
pub const CORRELATIVO_MAX: i32 = 9999;

const MAX_INTENTOS: u32 = 100;

pub struct NumeracionService<'a> {
    repository: &'a TarjetaRepository,
}

impl<'a> NumeracionService<'a> {
    pub fn new(repository: &'a TarjetaRepository) -> Self {
        Self { repository }
    }

    /// Emitir un número de tarjeta único junto con su correlativo.
    pub async fn emitir_numero(&self) -> Result<(String, i32), AppError> {
        let ultima = self.repository.ultima().await?;
        let mut correlativo = siguiente_correlativo(ultima.map(|t| t.correlativo));

        // Un solo prefijo aleatorio por solicitud
        let prefijo: u16 = rand::thread_rng().gen_range(0..=9999);

        for _ in 0..MAX_INTENTOS {
            if correlativo > CORRELATIVO_MAX {
                return Err(AppError::Internal(
                    "No hay correlativos de tarjeta disponibles".to_string(),
                ));
            }

            let numero = componer_numero(prefijo, correlativo);
            if !self.repository.numero_existe(&numero).await? {
                return Ok((numero, correlativo));
            }

            correlativo += 1;
        }

        Err(AppError::Internal(
            "No se pudo generar un número de tarjeta único".to_string(),
        ))
    }
}

/// Correlativo que sigue al último emitido; la primera tarjeta usa el 1.
pub fn siguiente_correlativo(ultimo: Option<i32>) -> i32 {
    match ultimo {
        Some(c) => c + 1,
        None => 1,
    }
}

/// Componer el número de 8 dígitos: prefijo y correlativo, ambos con ceros a
/// la izquierda.
pub fn componer_numero(prefijo: u16, correlativo: i32) -> String {
    format!("{:04}{:04}", prefijo, correlativo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::validate_numero_tarjeta;

    #[test]
    fn test_siguiente_correlativo() {
        assert_eq!(siguiente_correlativo(None), 1);
        assert_eq!(siguiente_correlativo(Some(1)), 2);
        assert_eq!(siguiente_correlativo(Some(41)), 42);
        assert_eq!(siguiente_correlativo(Some(9999)), 10000);
    }

    #[test]
    fn test_componer_numero_con_ceros() {
        assert_eq!(componer_numero(1234, 1), "12340001");
        assert_eq!(componer_numero(1234, 42), "12340042");
        assert_eq!(componer_numero(7, 9999), "00079999");
    }

    #[test]
    fn test_numero_siempre_ocho_digitos() {
        for (prefijo, correlativo) in [(0u16, 1), (9999, 9999), (500, 73)] {
            let numero = componer_numero(prefijo, correlativo);
            assert_eq!(numero.len(), 8);
            assert!(validate_numero_tarjeta(&numero).is_ok());
        }
    }

    #[test]
    fn test_correlativo_fuera_de_capacidad() {
        assert!(siguiente_correlativo(Some(CORRELATIVO_MAX)) > CORRELATIVO_MAX);
    }
}
