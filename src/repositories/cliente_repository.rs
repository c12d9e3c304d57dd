use crate::dto::cliente_dto::{CreateClienteRequest, UpdateClienteRequest};
use crate::models::cliente::Cliente;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct ClienteRepository {
    pool: PgPool,
}

impl ClienteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        request: CreateClienteRequest,
        logo: Option<Vec<u8>>,
    ) -> Result<Cliente, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            INSERT INTO clientes (nombre, pais, estado, ciudad, email, telefono, nfi, canal_id, subcanal_id, logo)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(request.nombre)
        .bind(request.pais)
        .bind(request.estado)
        .bind(request.ciudad)
        .bind(request.email)
        .bind(request.telefono)
        .bind(request.nfi)
        .bind(request.canal_id)
        .bind(request.subcanal_id)
        .bind(logo)
        .fetch_one(&self.pool)
        .await?;

        Ok(cliente)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Cliente>, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>("SELECT * FROM clientes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(cliente)
    }

    pub async fn list(&self, limite: i64, offset: i64) -> Result<Vec<Cliente>, AppError> {
        let clientes = sqlx::query_as::<_, Cliente>(
            "SELECT * FROM clientes ORDER BY creado_en DESC LIMIT $1 OFFSET $2",
        )
        .bind(limite)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(clientes)
    }

    // Consulta de conteo independiente de la de datos; bajo escrituras
    // concurrentes el total puede divergir de la página devuelta.
    pub async fn count(&self) -> Result<i64, AppError> {
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM clientes")
            .fetch_one(&self.pool)
            .await?;

        Ok(total.0)
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateClienteRequest,
        logo: Option<Vec<u8>>,
    ) -> Result<Cliente, AppError> {
        let actual = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        let cliente = sqlx::query_as::<_, Cliente>(
            r#"
            UPDATE clientes
            SET nombre = $2, pais = $3, estado = $4, ciudad = $5, email = $6,
                telefono = $7, nfi = $8, canal_id = $9, subcanal_id = $10,
                logo = $11, activo = $12
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.nombre.unwrap_or(actual.nombre))
        .bind(request.pais.unwrap_or(actual.pais))
        .bind(request.estado.unwrap_or(actual.estado))
        .bind(request.ciudad.unwrap_or(actual.ciudad))
        .bind(request.email.unwrap_or(actual.email))
        .bind(request.telefono.unwrap_or(actual.telefono))
        .bind(request.nfi.unwrap_or(actual.nfi))
        .bind(request.canal_id.or(actual.canal_id))
        .bind(request.subcanal_id.or(actual.subcanal_id))
        .bind(logo.or(actual.logo))
        .bind(request.activo.unwrap_or(actual.activo))
        .fetch_one(&self.pool)
        .await?;

        Ok(cliente)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Cliente no encontrado".to_string()));
        }

        Ok(())
    }
}
