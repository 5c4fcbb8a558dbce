//! Client-side state containers.
//!
//! ARCHITECTURE
//! ============
//! `session` and `ui` are provided app-wide through context. The remaining
//! modules hold page-scoped form state; each page creates its own signal so
//! nothing leaks between routes.

pub mod campaigns;
pub mod chat;
pub mod content;
pub mod leads;
pub mod logout;
pub mod session;
pub mod ui;
