//! Right-click menu state

use dioxus::prelude::*;

/// The card the menu was opened on and where the pointer was
#[derive(Clone, Debug, PartialEq)]
pub struct ContextMenuTarget {
    pub link_id: String,
    /// Client coordinates of the right-click
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ContextMenuState {
    /// `None` while the menu is hidden
    pub target: Option<ContextMenuTarget>,
}

impl ContextMenuState {
    pub fn open_at(&mut self, link_id: impl Into<String>, x: f64, y: f64) {
        self.target = Some(ContextMenuTarget {
            link_id: link_id.into(),
            x,
            y,
        });
    }

    pub fn close(&mut self) {
        self.target = None;
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_at_records_target() {
        let mut state = ContextMenuState::default();
        state.open_at("42", 10.0, 20.0);
        assert!(state.is_open());
        assert_eq!(
            state.target,
            Some(ContextMenuTarget {
                link_id: "42".to_string(),
                x: 10.0,
                y: 20.0
            })
        );
    }

    #[test]
    fn test_reopen_moves_menu() {
        let mut state = ContextMenuState::default();
        state.open_at("a", 1.0, 1.0);
        state.open_at("b", 5.0, 6.0);
        assert_eq!(
            state.target.as_ref().map(|t| t.link_id.as_str()),
            Some("b")
        );
        state.close();
        assert!(!state.is_open());
        assert_eq!(state.target, None);
    }
}
