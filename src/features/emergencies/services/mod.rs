mod emergency_service;

pub use emergency_service::EmergencyService;
