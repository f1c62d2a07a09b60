//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean al schema SQLite.

pub mod attachment;
pub mod driver;

pub use attachment::{Attachment, AttachmentKind, AttachmentMetadata};
pub use driver::{Driver, DriverStatus, CNH_CATEGORIES};
