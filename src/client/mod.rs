//! Acceso a datos del lado cliente
//!
//! `DriversApi` es la costura entre la UI y el servidor; `HttpDriversClient`
//! la implementa sobre HTTP y `DriversStore` guarda el estado de la lista.

pub mod api;
pub mod http;
pub mod store;

#[cfg(test)]
pub(crate) mod fake;

pub use api::{ClientError, DriversApi};
pub use http::HttpDriversClient;
pub use store::{DriversStore, MutationState, QueryState};
