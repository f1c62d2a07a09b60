//! Formulario de conductor
//!
//! Guarda los valores tal como se muestran (con máscara), valida al enviar
//! y produce el `DriverRequest` limpio que se manda a la API.

use std::collections::BTreeMap;
use std::fmt;

use validator::ValidationError;

use super::mask::{CNH_MASK, CPF_MASK, PHONE_MASK};
use super::FileSelection;
use crate::dto::driver_dto::DriverRequest;
use crate::models::{Driver, DriverStatus};
use crate::utils::validation::{
    only_digits, validate_category_selection, validate_cnh_number, validate_cpf, validate_name,
    validate_phone,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Cpf,
    Phone,
    CnhNumber,
    CnhCategory,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Cpf => "CPF",
            FormField::Phone => "Phone",
            FormField::CnhNumber => "CNH Number",
            FormField::CnhCategory => "CNH Categories",
        }
    }
}

/// Mensajes de error por campo
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<FormField, String>,
}

impl FormErrors {
    fn check(&mut self, field: FormField, result: Result<(), ValidationError>) {
        if let Err(error) = result {
            let message = error
                .message
                .map(|m| m.into_owned())
                .unwrap_or_else(|| error.code.into_owned());
            self.fields.insert(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.fields.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field.label(), msg))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for FormErrors {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverForm {
    pub name: String,
    pub cpf: String,
    pub phone: String,
    pub cnh_number: String,
    pub cnh_categories: Vec<String>,
    pub status: DriverStatus,
    pub photo: Option<FileSelection>,
    pub cnh_pdf: Option<FileSelection>,
}

impl DriverForm {
    /// Formulario vacío para un conductor nuevo
    pub fn empty() -> Self {
        Self::default()
    }

    /// Formulario precargado para editar
    pub fn from_driver(driver: &Driver) -> Self {
        Self {
            name: driver.name.clone(),
            cpf: CPF_MASK.apply(&driver.cpf),
            phone: PHONE_MASK.apply(&driver.phone),
            cnh_number: CNH_MASK.apply(&driver.cnh_number),
            cnh_categories: driver.categories(),
            status: driver.status,
            photo: None,
            cnh_pdf: None,
        }
    }

    pub fn set_cpf(&mut self, input: &str) {
        self.cpf = CPF_MASK.apply(input);
    }

    pub fn set_phone(&mut self, input: &str) {
        self.phone = PHONE_MASK.apply(input);
    }

    pub fn set_cnh_number(&mut self, input: &str) {
        self.cnh_number = CNH_MASK.apply(input);
    }

    /// Marcar o desmarcar una categoría
    pub fn toggle_category(&mut self, code: &str) {
        if let Some(pos) = self.cnh_categories.iter().position(|c| c == code) {
            self.cnh_categories.remove(pos);
        } else {
            self.cnh_categories.push(code.to_string());
        }
    }

    pub fn photo_preview(&self) -> Option<String> {
        self.photo.as_ref().map(FileSelection::data_url)
    }

    pub fn cnh_pdf_name(&self) -> Option<&str> {
        self.cnh_pdf.as_ref().map(|f| f.file_name.as_str())
    }

    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        errors.check(FormField::Name, validate_name(&self.name));
        errors.check(FormField::Cpf, validate_cpf(&self.cpf));
        errors.check(FormField::Phone, validate_phone(&self.phone));
        errors.check(FormField::CnhNumber, validate_cnh_number(&self.cnh_number));
        errors.check(
            FormField::CnhCategory,
            validate_category_selection(&self.cnh_categories),
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Payload limpio: solo dígitos, categorías unidas con coma
    pub fn to_request(&self, id: Option<i64>) -> DriverRequest {
        DriverRequest {
            id,
            name: self.name.clone(),
            cpf: only_digits(&self.cpf),
            cnh_number: only_digits(&self.cnh_number),
            cnh_category: self.cnh_categories.join(","),
            phone: only_digits(&self.phone),
            status: self.status,
        }
    }
}
