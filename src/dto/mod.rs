pub mod driver_dto;
