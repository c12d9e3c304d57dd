use crate::dto::cliente_dto::{ClienteResponse, CreateClienteRequest, UpdateClienteRequest};
use crate::dto::ApiResponse;
use crate::repositories::cliente_repository::ClienteRepository;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::pagination::{Paginacion, Paginado};
use crate::utils::validation::validate_telefono;
use sqlx::PgPool;
use validator::Validate;

pub struct ClienteController {
    repository: ClienteRepository,
}

impl ClienteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClienteRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateClienteRequest,
        logo: Option<Vec<u8>>,
    ) -> Result<ApiResponse<ClienteResponse>, AppError> {
        request.validate()?;

        if validate_telefono(&request.telefono).is_err() {
            return Err(validation_error(
                "telefono",
                "El teléfono no tiene un formato válido",
            ));
        }

        let cliente = self.repository.create(request, logo).await?;

        Ok(ApiResponse::new(
            "Cliente creado exitosamente",
            cliente.into(),
        ))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ClienteResponse, AppError> {
        let cliente = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        Ok(cliente.into())
    }

    pub async fn list(
        &self,
        paginacion: Paginacion,
    ) -> Result<Paginado<ClienteResponse>, AppError> {
        let clientes = self
            .repository
            .list(paginacion.limite(), paginacion.offset())
            .await?;
        let total = self.repository.count().await?;

        let data = clientes.into_iter().map(ClienteResponse::from).collect();
        Ok(Paginado::new(data, total, &paginacion))
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateClienteRequest,
        logo: Option<Vec<u8>>,
    ) -> Result<ApiResponse<ClienteResponse>, AppError> {
        request.validate()?;

        let cliente = self.repository.update(id, request, logo).await?;

        Ok(ApiResponse::new(
            "Cliente actualizado exitosamente",
            cliente.into(),
        ))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
