//! Reinicio de billeteras de flota
//!
//! La única mutación de varios pasos del sistema. Corre dentro de una sola
//! transacción de base de datos: por cada vehículo se busca su billetera (los
//! que no tienen se omiten en silencio), se toma el canal/subcanal de una
//! tarjeta asociada, se restaura la asignación del período y se inserta una
//! fila de auditoría. Cualquier error revierte todo; si ningún vehículo tenía
//! billetera la operación es un 404, no un éxito vacío.

use crate::models::billetera::{Billetera, ReinicioBilletera};
use crate::utils::errors::AppError;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

pub struct ResetBilleteraService {
    pool: PgPool,
}

impl ResetBilleteraService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn reiniciar(
        &self,
        usuario_id: i32,
        vehiculos: &[i32],
        fecha: DateTime<Utc>,
    ) -> Result<Vec<ReinicioBilletera>, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut reinicios = Vec::new();

        for &vehiculo_id in vehiculos {
            let billetera = sqlx::query_as::<_, Billetera>(
                "SELECT * FROM billeteras WHERE vehiculo_id = $1",
            )
            .bind(vehiculo_id)
            .fetch_optional(&mut *tx)
            .await?;

            let billetera = match billetera {
                Some(b) => b,
                // Vehículo sin billetera: se omite
                None => continue,
            };

            let canal: Option<(Option<i32>, Option<i32>)> = sqlx::query_as(
                r#"
                SELECT canal_id, subcanal_id FROM tarjetas
                WHERE vehiculo_id = $1
                ORDER BY creado_en DESC
                LIMIT 1
                "#,
            )
            .bind(vehiculo_id)
            .fetch_optional(&mut *tx)
            .await?;
            let (canal_id, subcanal_id) = canal.unwrap_or((None, None));

            sqlx::query(
                r#"
                UPDATE billeteras
                SET galones_disponibles = galones_totales,
                    galones_consumidos = 0,
                    odometro = 0,
                    actualizado_en = $2
                WHERE id = $1
                "#,
            )
            .bind(billetera.id)
            .bind(fecha)
            .execute(&mut *tx)
            .await?;

            let reinicio = sqlx::query_as::<_, ReinicioBilletera>(
                r#"
                INSERT INTO reinicios_billetera
                    (billetera_id, vehiculo_id, canal_id, subcanal_id, usuario_id, fecha)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING *
                "#,
            )
            .bind(billetera.id)
            .bind(vehiculo_id)
            .bind(canal_id)
            .bind(subcanal_id)
            .bind(usuario_id)
            .bind(fecha)
            .fetch_one(&mut *tx)
            .await?;

            reinicios.push(reinicio);
        }

        if reinicios.is_empty() {
            tx.rollback().await?;
            return Err(AppError::NotFound(
                "No se encontraron billeteras para los vehículos indicados".to_string(),
            ));
        }

        tx.commit().await?;
        Ok(reinicios)
    }
}
