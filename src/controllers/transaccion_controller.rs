use crate::dto::transaccion_dto::{
    CreateTransaccionRequest, TransaccionResponse, UpdateTransaccionRequest,
};
use crate::dto::ApiResponse;
use crate::repositories::transaccion_repository::TransaccionRepository;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::pagination::{Paginacion, Paginado};
use crate::utils::validation::validate_positive;
use sqlx::PgPool;
use validator::Validate;

pub struct TransaccionController {
    repository: TransaccionRepository,
}

impl TransaccionController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TransaccionRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateTransaccionRequest,
    ) -> Result<ApiResponse<TransaccionResponse>, AppError> {
        request.validate()?;

        if validate_positive(request.galones).is_err() {
            return Err(validation_error("galones", "Los galones deben ser positivos"));
        }
        if validate_positive(request.monto).is_err() {
            return Err(validation_error("monto", "El monto debe ser positivo"));
        }

        let transaccion = self.repository.create(request).await?;

        // Si la tarjeta está ligada a un vehículo con billetera, se debita y
        // se registra el consumo de flota. Son sentencias independientes de
        // la venta, sin transacción compartida.
        if let Some(billetera) = self
            .repository
            .billetera_de_tarjeta(transaccion.tarjeta_id)
            .await?
        {
            self.repository
                .registrar_consumo_flota(&billetera, transaccion.galones, transaccion.odometro)
                .await?;
        }

        Ok(ApiResponse::new(
            "Transacción registrada exitosamente",
            transaccion.into(),
        ))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<TransaccionResponse, AppError> {
        let transaccion = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Transacción no encontrada".to_string()))?;

        Ok(transaccion.into())
    }

    pub async fn list(
        &self,
        paginacion: Paginacion,
    ) -> Result<Paginado<TransaccionResponse>, AppError> {
        let transacciones = self
            .repository
            .list(paginacion.limite(), paginacion.offset())
            .await?;
        let total = self.repository.count().await?;

        let data = transacciones
            .into_iter()
            .map(TransaccionResponse::from)
            .collect();
        Ok(Paginado::new(data, total, &paginacion))
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateTransaccionRequest,
    ) -> Result<ApiResponse<TransaccionResponse>, AppError> {
        request.validate()?;

        let transaccion = self.repository.update(id, request).await?;

        Ok(ApiResponse::new(
            "Transacción actualizada exitosamente",
            transaccion.into(),
        ))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
