//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores y validación.

pub mod errors;
pub mod json;
pub mod validation;
