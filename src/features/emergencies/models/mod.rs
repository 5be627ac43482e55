mod emergency_alert;

pub use emergency_alert::{EmergencyAlert, NewEmergencyAlert};
