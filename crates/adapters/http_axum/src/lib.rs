//! # roster-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** over the user collection
//!   (`/users`, `/users/{id}`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses using the
//!   `{"data": ...}` / `{"error": ...}` envelope
//! - Answer every unmatched method/path combination with
//!   `405 Method Not Allowed`
//!
//! ## Dependency rule
//! Depends on `roster-app` (for port traits and services) and `roster-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
