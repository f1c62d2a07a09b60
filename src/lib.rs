//! Fleet management: API REST de conductores, cliente HTTP, formulario
//! con validación y view-model de la página de conductores.

pub mod client;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod ui;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
