use async_trait::async_trait;
use thiserror::Error;

use crate::dto::driver_dto::DriverRequest;
use crate::forms::FileSelection;
use crate::models::{AttachmentKind, AttachmentMetadata, Driver};

/// Errores del lado cliente
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            ClientError::Api { status, .. } => Some(*status),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Operaciones de la API de conductores vistas desde el cliente
#[async_trait]
pub trait DriversApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Driver>, ClientError>;

    async fn get(&self, id: i64) -> Result<Driver, ClientError>;

    async fn create(&self, request: &DriverRequest) -> Result<Driver, ClientError>;

    /// PUT /drivers/{id}; el request tiene que llevar el mismo id
    async fn update(&self, id: i64, request: &DriverRequest) -> Result<(), ClientError>;

    async fn remove(&self, id: i64) -> Result<(), ClientError>;

    async fn upload_attachment(
        &self,
        driver_id: i64,
        kind: AttachmentKind,
        file: &FileSelection,
    ) -> Result<AttachmentMetadata, ClientError>;
}
