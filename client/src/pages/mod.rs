//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped form state and issues its own requests;
//! shared rendering lives in `components`. Pages never read each other's
//! state, only the session signal from context.

pub mod about;
pub mod campaign_scheduler;
pub mod chatbot;
pub mod content_editor;
pub mod home;
pub mod lead_scoring;
pub mod login;
pub mod logout;
pub mod profile;
pub mod register;
pub mod scheduled_campaigns;
