//! # roster-adapter-storage-json
//!
//! JSON file persistence adapter using [tokio::fs](https://docs.rs/tokio).
//!
//! ## Responsibilities
//! - Implement the [`CollectionStore`] port defined in `roster-app::ports::storage`
//! - Keep the whole collection in one pretty-printed JSON document on disk
//! - Seed a missing document with an empty collection at startup
//! - Map IO and parse failures onto the domain storage errors
//!
//! ## Dependency rule
//! Depends on `roster-app` (for port traits) and `roster-domain` (for domain
//! types). The `app` and `domain` crates must never reference this adapter.
//!
//! [`CollectionStore`]: roster_app::ports::CollectionStore

pub mod store;

pub use store::{Config, JsonCollectionStore};
