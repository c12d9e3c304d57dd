use crate::dto::billetera_dto::{
    BilleteraResponse, CreateBilleteraRequest, ResetBilleterasRequest, UpdateBilleteraRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::sesion::UsuarioSesion;
use crate::models::billetera::{ReinicioBilletera, TransaccionFlota};
use crate::repositories::billetera_repository::BilleteraRepository;
use crate::services::reset_billetera_service::ResetBilleteraService;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::{validate_periodo, validate_positive};
use sqlx::PgPool;
use validator::Validate;

pub struct BilleteraController {
    repository: BilleteraRepository,
    reset_service: ResetBilleteraService,
}

impl BilleteraController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BilleteraRepository::new(pool.clone()),
            reset_service: ResetBilleteraService::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateBilleteraRequest,
    ) -> Result<ApiResponse<BilleteraResponse>, AppError> {
        request.validate()?;

        if validate_periodo(request.periodo_dias).is_err() {
            return Err(validation_error(
                "periodo_dias",
                "El período debe ser 1, 7, 15 o 30 días",
            ));
        }
        if validate_positive(request.galones_totales).is_err() {
            return Err(validation_error(
                "galones_totales",
                "Los galones totales deben ser positivos",
            ));
        }

        if self
            .repository
            .find_by_vehiculo(request.vehiculo_id)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(
                "El vehículo ya tiene una billetera".to_string(),
            ));
        }

        let billetera = self.repository.create(request).await?;

        Ok(ApiResponse::new(
            "Billetera creada exitosamente",
            billetera.into(),
        ))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<BilleteraResponse, AppError> {
        let billetera = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Billetera no encontrada".to_string()))?;

        Ok(billetera.into())
    }

    pub async fn list(&self) -> Result<Vec<BilleteraResponse>, AppError> {
        let billeteras = self.repository.list().await?;
        Ok(billeteras.into_iter().map(BilleteraResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateBilleteraRequest,
    ) -> Result<ApiResponse<BilleteraResponse>, AppError> {
        request.validate()?;

        if let Some(periodo) = request.periodo_dias {
            if validate_periodo(periodo).is_err() {
                return Err(validation_error(
                    "periodo_dias",
                    "El período debe ser 1, 7, 15 o 30 días",
                ));
            }
        }

        let billetera = self.repository.update(id, request).await?;

        Ok(ApiResponse::new(
            "Billetera actualizada exitosamente",
            billetera.into(),
        ))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.repository.delete(id).await
    }

    pub async fn movimientos(&self, id: i32) -> Result<Vec<TransaccionFlota>, AppError> {
        // 404 si la billetera no existe, aunque no tenga movimientos
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Billetera no encontrada".to_string()))?;

        self.repository.movimientos(id).await
    }

    /// Reinicio del período de las billeteras de los vehículos indicados.
    /// Requiere sesión: el usuario queda registrado en la auditoría.
    pub async fn reiniciar(
        &self,
        usuario: &UsuarioSesion,
        request: ResetBilleterasRequest,
    ) -> Result<ApiResponse<Vec<ReinicioBilletera>>, AppError> {
        request.validate()?;

        let reinicios = self
            .reset_service
            .reiniciar(usuario.id, &request.vehiculos, request.fecha)
            .await?;

        Ok(ApiResponse::new(
            "Billeteras reiniciadas exitosamente",
            reinicios,
        ))
    }
}
