use crate::dto::billetera_dto::{CreateBilleteraRequest, UpdateBilleteraRequest};
use crate::models::billetera::{Billetera, TransaccionFlota};
use crate::utils::errors::{validation_error, AppError};
use rust_decimal::Decimal;
use sqlx::PgPool;

pub struct BilleteraRepository {
    pool: PgPool,
}

impl BilleteraRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateBilleteraRequest) -> Result<Billetera, AppError> {
        let totales = Decimal::from_f64_retain(request.galones_totales)
            .ok_or_else(|| validation_error("galones_totales", "Los galones no son válidos"))?;

        // La billetera nace con todo el período disponible
        let billetera = sqlx::query_as::<_, Billetera>(
            r#"
            INSERT INTO billeteras (vehiculo_id, periodo_dias, galones_totales, galones_disponibles)
            VALUES ($1, $2, $3, $3)
            RETURNING *
            "#,
        )
        .bind(request.vehiculo_id)
        .bind(request.periodo_dias)
        .bind(totales)
        .fetch_one(&self.pool)
        .await?;

        Ok(billetera)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Billetera>, AppError> {
        let billetera = sqlx::query_as::<_, Billetera>("SELECT * FROM billeteras WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(billetera)
    }

    pub async fn find_by_vehiculo(&self, vehiculo_id: i32) -> Result<Option<Billetera>, AppError> {
        let billetera =
            sqlx::query_as::<_, Billetera>("SELECT * FROM billeteras WHERE vehiculo_id = $1")
                .bind(vehiculo_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(billetera)
    }

    pub async fn list(&self) -> Result<Vec<Billetera>, AppError> {
        let billeteras =
            sqlx::query_as::<_, Billetera>("SELECT * FROM billeteras ORDER BY creado_en DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(billeteras)
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateBilleteraRequest,
    ) -> Result<Billetera, AppError> {
        let actual = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Billetera no encontrada".to_string()))?;

        let decimal_o = |v: Option<f64>, actual: Decimal, campo: &'static str| match v {
            Some(x) => Decimal::from_f64_retain(x)
                .ok_or_else(|| validation_error(campo, "El valor no es válido")),
            None => Ok(actual),
        };

        let totales = decimal_o(request.galones_totales, actual.galones_totales, "galones_totales")?;
        let disponibles = decimal_o(
            request.galones_disponibles,
            actual.galones_disponibles,
            "galones_disponibles",
        )?;
        let consumidos = decimal_o(
            request.galones_consumidos,
            actual.galones_consumidos,
            "galones_consumidos",
        )?;
        let odometro = decimal_o(request.odometro, actual.odometro, "odometro")?;

        let billetera = sqlx::query_as::<_, Billetera>(
            r#"
            UPDATE billeteras
            SET periodo_dias = $2, galones_totales = $3, galones_disponibles = $4,
                galones_consumidos = $5, odometro = $6, actualizado_en = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.periodo_dias.unwrap_or(actual.periodo_dias))
        .bind(totales)
        .bind(disponibles)
        .bind(consumidos)
        .bind(odometro)
        .fetch_one(&self.pool)
        .await?;

        Ok(billetera)
    }

    /// Movimientos de flota de la billetera (consumos, recargas, reinicios)
    pub async fn movimientos(&self, billetera_id: i32) -> Result<Vec<TransaccionFlota>, AppError> {
        let movimientos = sqlx::query_as::<_, TransaccionFlota>(
            "SELECT * FROM transacciones_flota WHERE billetera_id = $1 ORDER BY creado_en DESC",
        )
        .bind(billetera_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(movimientos)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM billeteras WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Billetera no encontrada".to_string()));
        }

        Ok(())
    }
}
