//! Nearby medical facility search.
//!
//! Live results come from the OpenStreetMap Overpass interpreter and are
//! normalized into [`dtos::FacilityDto`]; every curated hospital is appended
//! after them.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/nearby?lat&lon&radius` | Search facilities around a point |

pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use clients::OverpassClient;
pub use services::FacilityService;
