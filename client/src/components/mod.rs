//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shell components (sidebar, navbar, footer) read the session and UI
//! signals from context; the rest are presentational and take props.

pub mod footer;
pub mod lead_chart;
pub mod lead_table;
pub mod markdown_preview;
pub mod navbar;
pub mod sidebar;
