//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and `types` re-exports the shared DTOs from
//! the `wire` crate so pages import from one place.

pub mod api;
pub mod types;
