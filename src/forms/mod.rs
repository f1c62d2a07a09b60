//! Formulario y validación del lado cliente

pub mod driver_form;
pub mod mask;

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};

pub use driver_form::{DriverForm, FormErrors, FormField};
pub use mask::{InputMask, CNH_MASK, CPF_MASK, PHONE_MASK};

/// Archivo elegido por el usuario (foto o PDF de la CNH)
#[derive(Clone, PartialEq, Eq)]
pub struct FileSelection {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl std::fmt::Debug for FileSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSelection")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.data.len())
            .finish()
    }
}

impl FileSelection {
    pub fn new(file_name: &str, content_type: &str, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            data,
        }
    }

    /// Leer un archivo del disco, deduciendo el content type por la extensión
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let data = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        Ok(Self {
            file_name,
            content_type: content_type_for_extension(&extension).to_string(),
            data,
        })
    }

    /// `data:` URL para previsualizar la foto
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.content_type, STANDARD.encode(&self.data))
    }
}

fn content_type_for_extension(extension: &str) -> &'static str {
    match extension {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}
