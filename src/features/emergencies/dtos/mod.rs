pub mod emergency_dto;

pub use emergency_dto::{CreateEmergencyAlertDto, EmergencyAlertResponseDto};
