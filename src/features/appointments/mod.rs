//! Appointment requests submitted from the facility finder.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/appointments` | Book an appointment |
//!
//! Appointments are create-only; the admin feature lists them.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::AppointmentService;
