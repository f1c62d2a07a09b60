use crate::models::{Attachment, AttachmentKind, AttachmentMetadata};
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::SqlitePool;

const METADATA_COLUMNS: &str = "driver_id, kind, file_name, content_type, size_bytes, uploaded_at";

pub struct AttachmentRepository {
    pool: SqlitePool,
}

impl AttachmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Guardar (o reemplazar) el adjunto de un tipo para un conductor
    pub async fn upsert(
        &self,
        driver_id: i64,
        kind: AttachmentKind,
        file_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> Result<AttachmentMetadata, AppError> {
        let metadata = sqlx::query_as::<_, AttachmentMetadata>(&format!(
            r#"
            INSERT INTO driver_attachments (driver_id, kind, file_name, content_type, size_bytes, data, uploaded_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT (driver_id, kind) DO UPDATE SET
                file_name = excluded.file_name,
                content_type = excluded.content_type,
                size_bytes = excluded.size_bytes,
                data = excluded.data,
                uploaded_at = excluded.uploaded_at
            RETURNING {}
            "#,
            METADATA_COLUMNS
        ))
        .bind(driver_id)
        .bind(kind.as_str())
        .bind(file_name)
        .bind(content_type)
        .bind(data.len() as i64)
        .bind(data)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(metadata)
    }

    pub async fn find(
        &self,
        driver_id: i64,
        kind: AttachmentKind,
    ) -> Result<Option<Attachment>, AppError> {
        let attachment = sqlx::query_as::<_, Attachment>(&format!(
            "SELECT {}, data FROM driver_attachments WHERE driver_id = ?1 AND kind = ?2",
            METADATA_COLUMNS
        ))
        .bind(driver_id)
        .bind(kind.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(attachment)
    }

    pub async fn list_for_driver(&self, driver_id: i64) -> Result<Vec<AttachmentMetadata>, AppError> {
        let attachments = sqlx::query_as::<_, AttachmentMetadata>(&format!(
            "SELECT {} FROM driver_attachments WHERE driver_id = ?1 ORDER BY kind",
            METADATA_COLUMNS
        ))
        .bind(driver_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(attachments)
    }

    pub async fn delete(&self, driver_id: i64, kind: AttachmentKind) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM driver_attachments WHERE driver_id = ?1 AND kind = ?2")
            .bind(driver_id)
            .bind(kind.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
