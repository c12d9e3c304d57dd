//! Verificación de permisos por ruta
//!
//! Las rutas de detalle con segmento dinámico se normalizan a su ruta
//! estática padre mediante una lista de prefijos enumerada a mano; cualquier
//! ruta dinámica nueva requiere agregar su prefijo aquí. Un administrador
//! siempre está permitido; el resto solo con una fila explícita
//! (usuario, ruta) marcada como permitida.

use crate::utils::errors::AppError;
use lazy_static::lazy_static;
use sqlx::PgPool;

lazy_static! {
    /// Prefijos dinámicos conocidos → ruta estática contra la que se evalúa
    static ref PREFIJOS_DINAMICOS: Vec<(&'static str, &'static str)> = vec![
        ("/vehiculos/editar/", "/vehiculos/editar"),
        ("/vehiculos/ver/", "/vehiculos/ver"),
        ("/clientes/editar/", "/clientes/editar"),
        ("/clientes/ver/", "/clientes/ver"),
        ("/transacciones/ver/", "/transacciones/ver"),
        ("/tarjetas/editar/", "/tarjetas/editar"),
    ];
}

/// Normalizar una ruta solicitada a su ruta estática padre
pub fn normalizar_ruta(ruta: &str) -> &str {
    for (prefijo, estatica) in PREFIJOS_DINAMICOS.iter() {
        if ruta.starts_with(prefijo) {
            return estatica;
        }
    }
    ruta
}

pub struct PermisosService {
    pool: PgPool,
}

impl PermisosService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Evaluar si un usuario puede acceder a una ruta. Devuelve también la
    /// ruta estática contra la que se evaluó.
    pub async fn verificar(&self, usuario_id: i32, ruta: &str) -> Result<(bool, String), AppError> {
        let ruta = normalizar_ruta(ruta).to_string();

        let es_admin: Option<(bool,)> =
            sqlx::query_as("SELECT es_admin FROM usuarios WHERE id = $1 AND activo = TRUE")
                .bind(usuario_id)
                .fetch_optional(&self.pool)
                .await?;

        let es_admin = match es_admin {
            Some((a,)) => a,
            // Usuario inexistente o inactivo: denegado
            None => return Ok((false, ruta)),
        };

        if es_admin {
            return Ok((true, ruta));
        }

        let fila: Option<(bool,)> =
            sqlx::query_as("SELECT permitido FROM permisos WHERE usuario_id = $1 AND ruta = $2")
                .bind(usuario_id)
                .bind(&ruta)
                .fetch_optional(&self.pool)
                .await?;

        Ok((fila.map(|(p,)| p).unwrap_or(false), ruta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normaliza_rutas_de_detalle() {
        assert_eq!(normalizar_ruta("/vehiculos/editar/42"), "/vehiculos/editar");
        assert_eq!(normalizar_ruta("/vehiculos/ver/7"), "/vehiculos/ver");
        assert_eq!(normalizar_ruta("/clientes/editar/15"), "/clientes/editar");
        assert_eq!(normalizar_ruta("/clientes/ver/15"), "/clientes/ver");
        assert_eq!(
            normalizar_ruta("/transacciones/ver/1001"),
            "/transacciones/ver"
        );
        assert_eq!(normalizar_ruta("/tarjetas/editar/9"), "/tarjetas/editar");
    }

    #[test]
    fn test_rutas_estaticas_no_cambian() {
        assert_eq!(normalizar_ruta("/vehiculos"), "/vehiculos");
        assert_eq!(normalizar_ruta("/vehiculos/editar"), "/vehiculos/editar");
        assert_eq!(normalizar_ruta("/descuentos"), "/descuentos");
    }

    #[test]
    fn test_rutas_desconocidas_no_cambian() {
        // Una ruta dinámica nueva sin prefijo enumerado queda tal cual
        assert_eq!(normalizar_ruta("/turnos/editar/3"), "/turnos/editar/3");
    }
}
