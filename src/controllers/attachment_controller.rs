use crate::config::environment::UploadLimits;
use crate::models::{Attachment, AttachmentKind, AttachmentMetadata};
use crate::repositories::attachment_repository::AttachmentRepository;
use crate::repositories::driver_repository::DriverRepository;
use crate::utils::errors::{bad_request_error, not_found_error, AppError};
use sqlx::SqlitePool;
use tracing::info;

/// Archivo recibido en un upload multipart
#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

pub struct AttachmentController {
    drivers: DriverRepository,
    attachments: AttachmentRepository,
    limits: UploadLimits,
}

impl AttachmentController {
    pub fn new(pool: SqlitePool, limits: UploadLimits) -> Self {
        Self {
            drivers: DriverRepository::new(pool.clone()),
            attachments: AttachmentRepository::new(pool),
            limits,
        }
    }

    async fn ensure_driver(&self, driver_id: i64) -> Result<(), AppError> {
        if !self.drivers.exists(driver_id).await? {
            return Err(not_found_error("Driver", &driver_id.to_string()));
        }
        Ok(())
    }

    pub async fn list(&self, driver_id: i64) -> Result<Vec<AttachmentMetadata>, AppError> {
        self.ensure_driver(driver_id).await?;
        self.attachments.list_for_driver(driver_id).await
    }

    pub async fn store(
        &self,
        driver_id: i64,
        kind: AttachmentKind,
        file: UploadedFile,
    ) -> Result<AttachmentMetadata, AppError> {
        self.ensure_driver(driver_id).await?;

        if file.file_name.trim().is_empty() {
            return Err(bad_request_error("File name is required"));
        }
        if file.data.is_empty() {
            return Err(bad_request_error("File is empty"));
        }
        if !kind.accepts(&file.content_type) {
            return Err(AppError::UnsupportedMediaType(format!(
                "{} does not accept '{}' (expected one of: {})",
                kind,
                file.content_type,
                kind.accepted_content_types().join(", ")
            )));
        }

        let max_bytes = self.limits.max_bytes(kind);
        if file.data.len() > max_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "{} exceeds {} bytes",
                kind, max_bytes
            )));
        }

        let metadata = self
            .attachments
            .upsert(driver_id, kind, &file.file_name, &file.content_type, &file.data)
            .await?;

        info!(
            "📎 Adjunto {} guardado para conductor {} ({} bytes)",
            kind, driver_id, metadata.size_bytes
        );
        Ok(metadata)
    }

    pub async fn fetch(&self, driver_id: i64, kind: AttachmentKind) -> Result<Attachment, AppError> {
        self.attachments
            .find(driver_id, kind)
            .await?
            .ok_or_else(|| not_found_error(&format!("Attachment {}", kind), &driver_id.to_string()))
    }

    pub async fn delete(&self, driver_id: i64, kind: AttachmentKind) -> Result<(), AppError> {
        if !self.attachments.delete(driver_id, kind).await? {
            return Err(not_found_error(&format!("Attachment {}", kind), &driver_id.to_string()));
        }
        Ok(())
    }
}
