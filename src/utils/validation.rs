//! Utilidades de validación
//!
//! Reglas de validación de conductores. Las usa tanto el formulario
//! (antes de cualquier llamada de red) como el servidor, que las aplica
//! de nuevo en el borde de la API.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

use crate::models::driver::CNH_CATEGORIES;

lazy_static! {
    static ref NAME_PATTERN: Regex = Regex::new(r"^[A-Za-zÀ-ÿ\s]+$").unwrap();
}

pub const NAME_MIN_LENGTH: usize = 3;
pub const CPF_DIGITS: usize = 11;
pub const CNH_DIGITS: usize = 11;
pub const PHONE_MIN_DIGITS: usize = 10;
pub const PHONE_MAX_DIGITS: usize = 11;

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Quitar todo lo que no sea dígito
pub fn only_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validar nombre: al menos 3 caracteres, solo letras (con acentos) y espacios
pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() < NAME_MIN_LENGTH || value.trim().is_empty() {
        let mut error = rule_error("name_length", "Name must be at least 3 characters");
        error.add_param("min".into(), &NAME_MIN_LENGTH);
        return Err(error);
    }
    if !NAME_PATTERN.is_match(value) {
        return Err(rule_error("name_charset", "Only letters and spaces allowed"));
    }
    Ok(())
}

/// Validar CPF: 11 dígitos, sin verificación de dígito de control
pub fn validate_cpf(value: &str) -> Result<(), ValidationError> {
    if only_digits(value).len() != CPF_DIGITS {
        return Err(rule_error("cpf", "CPF must have 11 digits"));
    }
    Ok(())
}

/// Validar número de CNH: 11 dígitos
pub fn validate_cnh_number(value: &str) -> Result<(), ValidationError> {
    if only_digits(value).len() != CNH_DIGITS {
        return Err(rule_error("cnh_number", "CNH must have 11 digits"));
    }
    Ok(())
}

/// Validar teléfono: 10 u 11 dígitos
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let digits = only_digits(value).len();
    if !(PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits) {
        let mut error = rule_error("phone", "Phone must have 10 or 11 digits");
        error.add_param("actual".into(), &digits);
        return Err(error);
    }
    Ok(())
}

/// Validar la selección de categorías de CNH del formulario
pub fn validate_category_selection(selected: &[String]) -> Result<(), ValidationError> {
    if selected.is_empty() {
        return Err(rule_error("cnh_category", "Select at least one category"));
    }
    if let Some(unknown) = selected
        .iter()
        .find(|code| !CNH_CATEGORIES.contains(&code.as_str()))
    {
        let mut error = rule_error("cnh_category_unknown", "Unknown CNH category");
        error.add_param("value".into(), unknown);
        error.add_param("allowed_values".into(), &CNH_CATEGORIES.join(","));
        return Err(error);
    }
    Ok(())
}

/// Separar la lista de categorías almacenada ("B,C" -> ["B", "C"])
pub fn split_categories(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validar la lista de categorías tal como llega a la API
pub fn validate_cnh_category(value: &str) -> Result<(), ValidationError> {
    validate_category_selection(&split_categories(value))
}
