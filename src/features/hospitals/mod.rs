//! Curated facility list managed by hand.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/hospitals` | List curated facilities |
//! | POST | `/api/hospitals` | Create a curated facility |
//! | GET | `/api/hospitals/{id}` | Get one curated facility |
//! | PUT | `/api/hospitals/{id}` | Partially update a curated facility |
//! | DELETE | `/api/hospitals/{id}` | Delete a curated facility |
//!
//! `{id}` accepts either the numeric id or its `hospital_`-prefixed form.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::HospitalService;
