use crate::dto::transaccion_dto::{CreateTransaccionRequest, UpdateTransaccionRequest};
use crate::models::billetera::Billetera;
use crate::models::transaccion::Transaccion;
use crate::utils::errors::{validation_error, AppError};
use rust_decimal::Decimal;
use sqlx::PgPool;

pub struct TransaccionRepository {
    pool: PgPool,
}

impl TransaccionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        request: CreateTransaccionRequest,
    ) -> Result<Transaccion, AppError> {
        let galones = Decimal::from_f64_retain(request.galones)
            .ok_or_else(|| validation_error("galones", "Los galones no son válidos"))?;
        let monto = Decimal::from_f64_retain(request.monto)
            .ok_or_else(|| validation_error("monto", "El monto no es válido"))?;
        let odometro = match request.odometro {
            Some(o) => Some(
                Decimal::from_f64_retain(o)
                    .ok_or_else(|| validation_error("odometro", "El odómetro no es válido"))?,
            ),
            None => None,
        };

        let transaccion = sqlx::query_as::<_, Transaccion>(
            r#"
            INSERT INTO transacciones (tarjeta_id, terminal_id, turno_id, combustible_id,
                                       galones, monto, moneda_id, odometro)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(request.tarjeta_id)
        .bind(request.terminal_id)
        .bind(request.turno_id)
        .bind(request.combustible_id)
        .bind(galones)
        .bind(monto)
        .bind(request.moneda_id)
        .bind(odometro)
        .fetch_one(&self.pool)
        .await?;

        Ok(transaccion)
    }

    /// Billetera del vehículo asociado a la tarjeta, si la tarjeta tiene
    /// vehículo y el vehículo tiene billetera.
    pub async fn billetera_de_tarjeta(
        &self,
        tarjeta_id: i32,
    ) -> Result<Option<Billetera>, AppError> {
        let billetera = sqlx::query_as::<_, Billetera>(
            r#"
            SELECT b.* FROM billeteras b
            JOIN tarjetas t ON t.vehiculo_id = b.vehiculo_id
            WHERE t.id = $1
            "#,
        )
        .bind(tarjeta_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(billetera)
    }

    /// Debita la billetera y registra el consumo de flota. Son dos sentencias
    /// independientes, sin transacción compartida con la venta.
    pub async fn registrar_consumo_flota(
        &self,
        billetera: &Billetera,
        galones: Decimal,
        odometro: Option<Decimal>,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE billeteras
            SET galones_disponibles = galones_disponibles - $2,
                galones_consumidos = galones_consumidos + $2,
                odometro = COALESCE($3, odometro),
                actualizado_en = NOW()
            WHERE id = $1
            "#,
        )
        .bind(billetera.id)
        .bind(galones)
        .bind(odometro)
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO transacciones_flota (billetera_id, vehiculo_id, galones, tipo)
            VALUES ($1, $2, $3, 'consumo')
            "#,
        )
        .bind(billetera.id)
        .bind(billetera.vehiculo_id)
        .bind(galones)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Transaccion>, AppError> {
        let transaccion =
            sqlx::query_as::<_, Transaccion>("SELECT * FROM transacciones WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(transaccion)
    }

    pub async fn list(&self, limite: i64, offset: i64) -> Result<Vec<Transaccion>, AppError> {
        let transacciones = sqlx::query_as::<_, Transaccion>(
            "SELECT * FROM transacciones ORDER BY creado_en DESC LIMIT $1 OFFSET $2",
        )
        .bind(limite)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(transacciones)
    }

    // Conteo independiente de la consulta de datos (ver notas de diseño).
    pub async fn count(&self) -> Result<i64, AppError> {
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM transacciones")
            .fetch_one(&self.pool)
            .await?;

        Ok(total.0)
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateTransaccionRequest,
    ) -> Result<Transaccion, AppError> {
        let actual = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Transacción no encontrada".to_string()))?;

        let odometro = match request.odometro {
            Some(o) => Some(
                Decimal::from_f64_retain(o)
                    .ok_or_else(|| validation_error("odometro", "El odómetro no es válido"))?,
            ),
            None => actual.odometro,
        };

        let transaccion = sqlx::query_as::<_, Transaccion>(
            r#"
            UPDATE transacciones
            SET turno_id = $2, odometro = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.turno_id.or(actual.turno_id))
        .bind(odometro)
        .fetch_one(&self.pool)
        .await?;

        Ok(transaccion)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM transacciones WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                "Transacción no encontrada".to_string(),
            ));
        }

        Ok(())
    }
}
