//! UI primitives for the notes CLI.
//!
//! - **Context**: environment detection (TTY, color, unicode)
//! - **Mode**: output mode resolution (json, plain, pretty)
//! - **Theme**: badge tokens and color styles
//! - **Render**: tables, receipts, hints, error lines
//!
//! Plain mode output is line oriented (`key=value`, one title per line) so
//! it stays stable for scripts; pretty mode is only used on a TTY.

mod context;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{badge, hint, kv, print, print_error, receipt, table, Column};
