//! Store types for UI state management
//!
//! The container owns these stores and hands children read-only values plus
//! callbacks. Each store derives `Store` for fine-grained reactivity via
//! lensing.

pub mod app;
pub mod job_board;
pub mod ui;

pub use app::*;
pub use job_board::*;
pub use ui::*;
