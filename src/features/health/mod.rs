//! Liveness probe.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/health` | Fixed liveness payload, no dependency checks |

pub mod handlers;
pub mod routes;
