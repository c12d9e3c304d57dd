use crate::dto::vehiculo_dto::{CreateVehiculoRequest, UpdateVehiculoRequest};
use crate::models::vehiculo::Vehiculo;
use crate::utils::errors::{validation_error, AppError};
use rust_decimal::Decimal;
use sqlx::PgPool;

pub struct VehiculoRepository {
    pool: PgPool,
}

impl VehiculoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateVehiculoRequest) -> Result<Vehiculo, AppError> {
        let odometro = Decimal::from_f64_retain(request.odometro.unwrap_or(0.0))
            .ok_or_else(|| validation_error("odometro", "El odómetro no es válido"))?;

        let vehiculo = sqlx::query_as::<_, Vehiculo>(
            r#"
            INSERT INTO vehiculos (cliente_id, placa, marca, modelo, anio, combustible_id, odometro)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(request.cliente_id)
        .bind(request.placa)
        .bind(request.marca)
        .bind(request.modelo)
        .bind(request.anio)
        .bind(request.combustible_id)
        .bind(odometro)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehiculo)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vehiculo>, AppError> {
        let vehiculo = sqlx::query_as::<_, Vehiculo>("SELECT * FROM vehiculos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehiculo)
    }

    pub async fn list(&self, cliente_id: Option<i32>) -> Result<Vec<Vehiculo>, AppError> {
        let vehiculos = match cliente_id {
            Some(cid) => {
                sqlx::query_as::<_, Vehiculo>(
                    "SELECT * FROM vehiculos WHERE cliente_id = $1 ORDER BY creado_en DESC",
                )
                .bind(cid)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Vehiculo>("SELECT * FROM vehiculos ORDER BY creado_en DESC")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(vehiculos)
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateVehiculoRequest,
    ) -> Result<Vehiculo, AppError> {
        let actual = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let odometro = match request.odometro {
            Some(o) => Decimal::from_f64_retain(o)
                .ok_or_else(|| validation_error("odometro", "El odómetro no es válido"))?,
            None => actual.odometro,
        };

        let vehiculo = sqlx::query_as::<_, Vehiculo>(
            r#"
            UPDATE vehiculos
            SET placa = $2, marca = $3, modelo = $4, anio = $5,
                combustible_id = $6, odometro = $7, activo = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.placa.unwrap_or(actual.placa))
        .bind(request.marca.or(actual.marca))
        .bind(request.modelo.or(actual.modelo))
        .bind(request.anio.or(actual.anio))
        .bind(request.combustible_id.or(actual.combustible_id))
        .bind(odometro)
        .bind(request.activo.unwrap_or(actual.activo))
        .fetch_one(&self.pool)
        .await?;

        Ok(vehiculo)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehiculos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        Ok(())
    }
}
