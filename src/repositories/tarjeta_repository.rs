use crate::dto::tarjeta_dto::{CreateTarjetaRequest, UpdateTarjetaRequest};
use crate::models::tarjeta::Tarjeta;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct TarjetaRepository {
    pool: PgPool,
}

impl TarjetaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Tarjeta emitida más recientemente, ordenada por fecha de creación y
    /// luego por correlativo numérico descendente.
    pub async fn ultima(&self) -> Result<Option<Tarjeta>, AppError> {
        let tarjeta = sqlx::query_as::<_, Tarjeta>(
            "SELECT * FROM tarjetas ORDER BY creado_en DESC, correlativo DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(tarjeta)
    }

    pub async fn numero_existe(&self, numero: &str) -> Result<bool, AppError> {
        let existe: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM tarjetas WHERE numero = $1)")
                .bind(numero)
                .fetch_one(&self.pool)
                .await?;

        Ok(existe.0)
    }

    pub async fn create(
        &self,
        numero: &str,
        correlativo: i32,
        request: CreateTarjetaRequest,
    ) -> Result<Tarjeta, AppError> {
        let tarjeta = sqlx::query_as::<_, Tarjeta>(
            r#"
            INSERT INTO tarjetas (numero, correlativo, tipo_tarjeta_id, cliente_id,
                                  vehiculo_id, conductor_id, canal_id, subcanal_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(numero)
        .bind(correlativo)
        .bind(request.tipo_tarjeta_id)
        .bind(request.cliente_id)
        .bind(request.vehiculo_id)
        .bind(request.conductor_id)
        .bind(request.canal_id)
        .bind(request.subcanal_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(tarjeta)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Tarjeta>, AppError> {
        let tarjeta = sqlx::query_as::<_, Tarjeta>("SELECT * FROM tarjetas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(tarjeta)
    }

    pub async fn list(&self, cliente_id: Option<i32>) -> Result<Vec<Tarjeta>, AppError> {
        let tarjetas = match cliente_id {
            Some(cid) => {
                sqlx::query_as::<_, Tarjeta>(
                    "SELECT * FROM tarjetas WHERE cliente_id = $1 ORDER BY creado_en DESC",
                )
                .bind(cid)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Tarjeta>("SELECT * FROM tarjetas ORDER BY creado_en DESC")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(tarjetas)
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateTarjetaRequest,
    ) -> Result<Tarjeta, AppError> {
        let actual = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tarjeta no encontrada".to_string()))?;

        let tarjeta = sqlx::query_as::<_, Tarjeta>(
            r#"
            UPDATE tarjetas
            SET tipo_tarjeta_id = $2, vehiculo_id = $3, conductor_id = $4,
                canal_id = $5, subcanal_id = $6, activa = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.tipo_tarjeta_id.unwrap_or(actual.tipo_tarjeta_id))
        .bind(request.vehiculo_id.or(actual.vehiculo_id))
        .bind(request.conductor_id.or(actual.conductor_id))
        .bind(request.canal_id.or(actual.canal_id))
        .bind(request.subcanal_id.or(actual.subcanal_id))
        .bind(request.activa.unwrap_or(actual.activa))
        .fetch_one(&self.pool)
        .await?;

        Ok(tarjeta)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tarjetas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Tarjeta no encontrada".to_string()));
        }

        Ok(())
    }
}
