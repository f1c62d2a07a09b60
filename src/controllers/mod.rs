pub mod attachment_controller;
pub mod driver_controller;
