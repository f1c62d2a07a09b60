//! Configuración de variables de entorno
//!
//! Todas las variables son opcionales; sin `.env` el servidor arranca con
//! los valores de desarrollo.

use std::env;

use anyhow::{Context, Result};

use crate::models::AttachmentKind;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";
pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;
pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

/// Límites de tamaño de los adjuntos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLimits {
    pub max_photo_bytes: usize,
    pub max_document_bytes: usize,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_photo_bytes: DEFAULT_MAX_PHOTO_BYTES,
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }
}

impl UploadLimits {
    pub fn max_bytes(&self, kind: AttachmentKind) -> usize {
        match kind {
            AttachmentKind::Photo => self.max_photo_bytes,
            AttachmentKind::CnhPdf => self.max_document_bytes,
        }
    }

    /// Límite del body HTTP: el adjunto más grande más margen para el multipart
    pub fn body_limit(&self) -> usize {
        self.max_photo_bytes.max(self.max_document_bytes) + 64 * 1024
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub cors_origins: Vec<String>,
    pub upload_limits: UploadLimits,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            cors_origins: vec![DEFAULT_FRONTEND_ORIGIN.to_string()],
            upload_limits: UploadLimits::default(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid number, got '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}

impl EnvironmentConfig {
    /// Leer la configuración del entorno, con valores por defecto
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let cors_origins = match env::var("CORS_ORIGINS") {
            Ok(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            Err(_) => defaults.cors_origins,
        };

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", defaults.port)?,
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            cors_origins,
            upload_limits: UploadLimits {
                max_photo_bytes: parse_var("MAX_PHOTO_BYTES", DEFAULT_MAX_PHOTO_BYTES)?,
                max_document_bytes: parse_var("MAX_DOCUMENT_BYTES", DEFAULT_MAX_DOCUMENT_BYTES)?,
            },
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
