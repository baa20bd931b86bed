//! Add/edit form state
//!
//! Holds which link is being edited (if any) as explicit state rather than
//! a module-level "currently editing" id.

use tracing::debug;

use crate::bookmark::{Bookmark, LinkDraft};
use crate::error::LinkError;
use crate::storage::KeyValueStorage;
use crate::store::LinkStore;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Closed,
    Adding,
    /// Editing the link with this id
    Editing(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkForm {
    pub mode: FormMode,
    pub draft: LinkDraft,
    /// Validation or save error shown inline
    pub error: Option<String>,
}

impl LinkForm {
    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            FormMode::Editing(_) => "Edit Link",
            _ => "Add New Link",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Editing(_) => "Save Changes",
            _ => "Add Link",
        }
    }

    /// Open with blank fields
    pub fn open_add(&mut self) {
        *self = Self {
            mode: FormMode::Adding,
            ..Self::default()
        };
    }

    /// Open pre-filled with an existing link
    pub fn open_edit(&mut self, bookmark: &Bookmark) {
        *self = Self {
            mode: FormMode::Editing(bookmark.id.clone()),
            draft: LinkDraft::from(bookmark),
            error: None,
        };
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Save the draft into the store.
    ///
    /// On success the form closes. On failure it stays open with the error
    /// message set and the store is left as it was.
    pub fn submit<S: KeyValueStorage>(&mut self, store: &mut LinkStore<S>) -> Result<(), LinkError> {
        let result = match &self.mode {
            FormMode::Closed => return Ok(()),
            FormMode::Adding => store.add(self.draft.clone()).map(|_| ()),
            FormMode::Editing(id) => store.update(id, self.draft.clone()).map(|found| {
                if !found {
                    debug!(id = %id, "Edited link no longer exists");
                }
            }),
        };

        match result {
            Ok(()) => {
                self.close();
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LinksConfig;
    use crate::storage::MemoryStorage;

    fn store() -> LinkStore<MemoryStorage> {
        LinkStore::load(MemoryStorage::new(), LinksConfig::default())
    }

    #[test]
    fn test_open_edit_prefills_fields() {
        let store = store();
        let github = store.find_by_id("1").unwrap();

        let mut form = LinkForm::default();
        form.open_edit(github);

        assert_eq!(form.mode, FormMode::Editing("1".to_string()));
        assert_eq!(form.draft.title, "GitHub");
        assert_eq!(form.draft.url, "https://github.com");
        assert_eq!(form.heading(), "Edit Link");
    }

    #[test]
    fn test_submit_add_closes_form() {
        let mut store = store();
        let before = store.len();

        let mut form = LinkForm::default();
        form.open_add();
        form.draft = LinkDraft::new("Example", "example.com", "", "");
        form.submit(&mut store).unwrap();

        assert!(!form.is_open());
        assert_eq!(store.len(), before + 1);
        assert_eq!(store.bookmarks().last().unwrap().url, "https://example.com");
    }

    #[test]
    fn test_submit_invalid_keeps_form_open_with_error() {
        let mut store = store();
        let before = store.bookmarks().to_vec();

        let mut form = LinkForm::default();
        form.open_add();
        form.draft.url = "example.com".to_string();

        assert_eq!(form.submit(&mut store), Err(LinkError::MissingTitle));
        assert!(form.is_open());
        assert_eq!(form.error.as_deref(), Some("Please enter a title"));
        assert_eq!(store.bookmarks(), before.as_slice());
    }

    #[test]
    fn test_submit_edit_updates_in_place() {
        let mut store = store();
        let mut form = LinkForm::default();
        form.open_edit(store.find_by_id("2").unwrap());
        form.draft.title = "Rust Lang".to_string();
        form.submit(&mut store).unwrap();

        assert_eq!(store.bookmarks()[1].id, "2");
        assert_eq!(store.bookmarks()[1].title, "Rust Lang");
    }

    #[test]
    fn test_submit_when_closed_is_noop() {
        let mut store = store();
        let mut form = LinkForm::default();
        form.draft.title = "Ignored".to_string();
        form.submit(&mut store).unwrap();
        assert_eq!(store.bookmarks(), crate::seed::default_links().as_slice());
    }
}
