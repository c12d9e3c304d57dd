use crate::dto::tarjeta_dto::{CreateTarjetaRequest, TarjetaResponse, UpdateTarjetaRequest};
use crate::dto::ApiResponse;
use crate::repositories::tarjeta_repository::TarjetaRepository;
use crate::services::numeracion_service::NumeracionService;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use validator::Validate;

pub struct TarjetaController {
    repository: TarjetaRepository,
}

impl TarjetaController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TarjetaRepository::new(pool),
        }
    }

    /// Emitir una tarjeta: el número lo genera el servicio de numeración.
    pub async fn create(
        &self,
        request: CreateTarjetaRequest,
    ) -> Result<ApiResponse<TarjetaResponse>, AppError> {
        request.validate()?;

        let numeracion = NumeracionService::new(&self.repository);
        let (numero, correlativo) = numeracion.emitir_numero().await?;

        let tarjeta = self.repository.create(&numero, correlativo, request).await?;

        Ok(ApiResponse::new(
            "Tarjeta emitida exitosamente",
            tarjeta.into(),
        ))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<TarjetaResponse, AppError> {
        let tarjeta = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tarjeta no encontrada".to_string()))?;

        Ok(tarjeta.into())
    }

    pub async fn list(&self, cliente_id: Option<i32>) -> Result<Vec<TarjetaResponse>, AppError> {
        let tarjetas = self.repository.list(cliente_id).await?;
        Ok(tarjetas.into_iter().map(TarjetaResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateTarjetaRequest,
    ) -> Result<ApiResponse<TarjetaResponse>, AppError> {
        request.validate()?;

        let tarjeta = self.repository.update(id, request).await?;

        Ok(ApiResponse::new(
            "Tarjeta actualizada exitosamente",
            tarjeta.into(),
        ))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
