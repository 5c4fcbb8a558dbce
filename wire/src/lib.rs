//! Shared REST schema and pure helpers for the marketing backend.
//!
//! This crate owns the request/response shapes used by both `client` and
//! `cli`, plus the small amount of client-side logic that both need: lead
//! banding, scored-CSV parsing, draft-list editing, content statistics and
//! token payload decoding. It performs no I/O.

pub mod auth;
pub mod campaign;
pub mod chat;
pub mod content;
pub mod drafts;
pub mod endpoints;
pub mod error;
pub mod leads;

pub use drafts::DraftList;
pub use error::ApiError;
