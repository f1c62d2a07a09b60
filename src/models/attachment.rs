//! Modelo de adjuntos del conductor
//!
//! Foto y PDF de la CNH. Se guardan como BLOB en `driver_attachments`,
//! uno por (conductor, tipo).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, FromRow, Row};

/// Tipo de adjunto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttachmentKind {
    #[serde(rename = "photo")]
    Photo,
    #[serde(rename = "cnh-pdf")]
    CnhPdf,
}

impl AttachmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttachmentKind::Photo => "photo",
            AttachmentKind::CnhPdf => "cnh-pdf",
        }
    }

    /// Content types aceptados para este tipo
    pub fn accepted_content_types(&self) -> &'static [&'static str] {
        match self {
            AttachmentKind::Photo => &["image/jpeg", "image/png", "image/gif"],
            AttachmentKind::CnhPdf => &["application/pdf"],
        }
    }

    pub fn accepts(&self, content_type: &str) -> bool {
        let essence = content_type.split(';').next().unwrap_or("").trim();
        self.accepted_content_types()
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(essence))
    }
}

impl fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown attachment kind '{0}'")]
pub struct UnknownAttachmentKind(pub String);

impl FromStr for AttachmentKind {
    type Err = UnknownAttachmentKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "photo" => Ok(AttachmentKind::Photo),
            "cnh-pdf" => Ok(AttachmentKind::CnhPdf),
            other => Err(UnknownAttachmentKind(other.to_string())),
        }
    }
}

/// Metadatos de un adjunto (sin el contenido)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentMetadata {
    pub driver_id: i64,
    pub kind: AttachmentKind,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub uploaded_at: DateTime<Utc>,
}

/// Adjunto completo, con los bytes
#[derive(Debug, Clone)]
pub struct Attachment {
    pub metadata: AttachmentMetadata,
    pub data: Vec<u8>,
}

fn decode_kind(row: &SqliteRow) -> Result<AttachmentKind, sqlx::Error> {
    let kind: String = row.try_get("kind")?;
    kind.parse().map_err(|e| sqlx::Error::ColumnDecode {
        index: "kind".to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, SqliteRow> for AttachmentMetadata {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            driver_id: row.try_get("driver_id")?,
            kind: decode_kind(row)?,
            file_name: row.try_get("file_name")?,
            content_type: row.try_get("content_type")?,
            size_bytes: row.try_get("size_bytes")?,
            uploaded_at: row.try_get("uploaded_at")?,
        })
    }
}

impl<'r> FromRow<'r, SqliteRow> for Attachment {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            metadata: AttachmentMetadata::from_row(row)?,
            data: row.try_get("data")?,
        })
    }
}
