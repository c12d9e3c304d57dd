use crate::dto::vehiculo_dto::{CreateVehiculoRequest, UpdateVehiculoRequest, VehiculoResponse};
use crate::dto::ApiResponse;
use crate::repositories::vehiculo_repository::VehiculoRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use validator::Validate;

pub struct VehiculoController {
    repository: VehiculoRepository,
}

impl VehiculoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehiculoRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehiculoRequest,
    ) -> Result<ApiResponse<VehiculoResponse>, AppError> {
        request.validate()?;

        let vehiculo = self.repository.create(request).await?;

        Ok(ApiResponse::new(
            "Vehículo creado exitosamente",
            vehiculo.into(),
        ))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<VehiculoResponse, AppError> {
        let vehiculo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(vehiculo.into())
    }

    pub async fn list(&self, cliente_id: Option<i32>) -> Result<Vec<VehiculoResponse>, AppError> {
        let vehiculos = self.repository.list(cliente_id).await?;
        Ok(vehiculos.into_iter().map(VehiculoResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateVehiculoRequest,
    ) -> Result<ApiResponse<VehiculoResponse>, AppError> {
        request.validate()?;

        let vehiculo = self.repository.update(id, request).await?;

        Ok(ApiResponse::new(
            "Vehículo actualizado exitosamente",
            vehiculo.into(),
        ))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
