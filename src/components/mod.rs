//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod log_list;
pub mod nav;
pub mod status;

pub use log_list::LogList;
pub use nav::{AppBar, NavDrawer, NavEntry, NAV_ENTRIES};
pub use status::StreamStatusBadge;
