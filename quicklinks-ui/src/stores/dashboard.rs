//! Dashboard state store

use dioxus::prelude::*;
use quicklinks_common::{GridView, PendingDelete, Theme};

/// State the dashboard view renders from.
///
/// `grid` is rebuilt wholesale from the Link Store after every change.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct DashboardState {
    /// Card view model for the current collection
    pub grid: GridView,
    /// Active theme
    pub theme: Theme,
    /// Delete awaiting a yes/no answer
    pub pending_delete: Option<PendingDelete>,
}
