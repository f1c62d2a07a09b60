use crate::dto::driver_dto::DriverRequest;
use crate::models::Driver;
use crate::repositories::driver_repository::DriverRepository;
use crate::utils::errors::{bad_request_error, not_found_error, AppError};
use sqlx::SqlitePool;
use tracing::info;
use validator::Validate;

pub struct DriverController {
    repository: DriverRepository,
}

impl DriverController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: DriverRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Driver>, AppError> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Driver, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Driver", &id.to_string()))
    }

    pub async fn create(&self, request: DriverRequest) -> Result<Driver, AppError> {
        request.validate()?;

        let driver = self.repository.create(&request).await?;
        info!("👤 Conductor creado con id {}", driver.id);
        Ok(driver)
    }

    /// Reemplazo completo. El id del body tiene que coincidir con el del path;
    /// si no, no se toca la base de datos.
    pub async fn update(&self, id: i64, request: DriverRequest) -> Result<Driver, AppError> {
        if request.id != Some(id) {
            return Err(bad_request_error(&format!(
                "Path id {} does not match body id {}",
                id,
                request
                    .id
                    .map(|body_id| body_id.to_string())
                    .unwrap_or_else(|| "(missing)".to_string())
            )));
        }

        request.validate()?;

        let driver = self
            .repository
            .update(&request.into_driver(id))
            .await?
            .ok_or_else(|| not_found_error("Driver", &id.to_string()))?;

        info!("✏️ Conductor {} actualizado", id);
        Ok(driver)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Driver", &id.to_string()));
        }

        info!("🗑️ Conductor {} eliminado", id);
        Ok(())
    }
}
