//! Capa de presentación: view-models que la consola dibuja

pub mod dialog;
pub mod drivers_page;
pub mod home;

pub use dialog::DialogState;
pub use drivers_page::{DriverRow, DriversPage, SubmitOutcome, TABLE_HEADERS};
pub use home::{NavSection, APP_TITLE, NAV_SECTIONS};
