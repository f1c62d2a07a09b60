pub mod attachment_repository;
pub mod driver_repository;
