//! Paginación de listados
//!
//! Query params `pagina`/`limite` y el sobre de respuesta paginada. El total
//! se obtiene con una consulta COUNT independiente de la consulta de datos.

use serde::{Deserialize, Serialize};

const LIMITE_DEFAULT: i64 = 25;
const LIMITE_MAX: i64 = 100;

/// Parámetros de paginación de un listado
#[derive(Debug, Clone, Deserialize)]
pub struct Paginacion {
    pub pagina: Option<i64>,
    pub limite: Option<i64>,
}

impl Paginacion {
    /// Página efectiva (base 1)
    pub fn pagina(&self) -> i64 {
        self.pagina.unwrap_or(1).max(1)
    }

    /// Límite efectivo, acotado a [1, 100]
    pub fn limite(&self) -> i64 {
        self.limite.unwrap_or(LIMITE_DEFAULT).clamp(1, LIMITE_MAX)
    }

    /// Desplazamiento para la cláusula OFFSET
    pub fn offset(&self) -> i64 {
        (self.pagina() - 1) * self.limite()
    }
}

/// Respuesta de listado paginado
#[derive(Debug, Serialize)]
pub struct Paginado<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub pagina: i64,
    pub limite: i64,
}

impl<T> Paginado<T> {
    pub fn new(data: Vec<T>, total: i64, paginacion: &Paginacion) -> Self {
        Self {
            data,
            total,
            pagina: paginacion.pagina(),
            limite: paginacion.limite(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = Paginacion {
            pagina: None,
            limite: None,
        };
        assert_eq!(p.pagina(), 1);
        assert_eq!(p.limite(), 25);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_offset() {
        let p = Paginacion {
            pagina: Some(3),
            limite: Some(10),
        };
        assert_eq!(p.offset(), 20);
    }

    #[test]
    fn test_clamps() {
        let p = Paginacion {
            pagina: Some(0),
            limite: Some(1000),
        };
        assert_eq!(p.pagina(), 1);
        assert_eq!(p.limite(), 100);
    }
}
