//! Pages
//!
//! Top-level content panels.

pub mod logs;

pub use logs::{attach_stream, LogStreamView};
