//! # roster-domain
//!
//! Pure domain model for the roster user-record service.
//!
//! ## Responsibilities
//! - Foundational types: the [`UserId`](id::UserId) identifier and the
//!   error conventions shared across the workspace
//! - Define **User** records and their payloads (full drafts, partial patches)
//! - Define the **Collection** — the ordered set of records persisted
//!   together, with id assignment and mutation semantics
//! - Define **Filters** used by the list operation
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod collection;
pub mod filter;
pub mod user;
