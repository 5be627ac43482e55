//! Read-only listings for staff.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/admin/appointments` | All appointments, newest first |
//! | GET | `/api/admin/emergencies` | All emergency alerts, newest first |
//!
//! Routes are relative; `main` nests them under `/api/admin`.

pub mod handlers;
pub mod routes;
pub mod services;

pub use services::AdminService;
