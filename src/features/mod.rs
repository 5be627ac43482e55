pub mod admin;
pub mod appointments;
pub mod emergencies;
pub mod facilities;
pub mod health;
pub mod hospitals;
