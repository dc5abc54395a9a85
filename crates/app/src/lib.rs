//! # roster-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `CollectionStore` — load and save the user collection as one document
//! - Define **driving/inbound ports** as use-case structs:
//!   - `UserService` — list, get, create, replace, patch, delete users
//! - Serialize every read-modify-write cycle against the single backing
//!   document so concurrent mutations cannot overwrite each other
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `roster-domain` only (plus `tokio::sync` for the cycle lock).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
