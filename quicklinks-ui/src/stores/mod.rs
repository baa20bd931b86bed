//! Store types for UI state management
//!
//! Each store derives `Store` for fine-grained reactivity via lensing.

pub mod context_menu;
pub mod dashboard;

pub use context_menu::*;
pub use dashboard::*;
