//! Contact form relay.
//!
//! Validates a website contact submission and forwards it as a single
//! notification email to the site owner through the configured provider.
//! Nothing is persisted and nothing is retried.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/contact` | No | Validate and relay a contact submission |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod submission;

pub use services::{ContactService, MailDispatcher};
