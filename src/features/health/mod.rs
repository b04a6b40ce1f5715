//! Liveness probe.
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/health` | No | Report that the server is up |

pub mod handlers;
pub mod routes;
