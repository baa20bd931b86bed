//! Link Store - the single source of truth for the bookmark collection
//!
//! Every successful mutation writes the whole collection back to storage
//! before returning, then notifies the subscribed listener. If the write
//! fails the in-memory change is rolled back, so memory and storage never
//! disagree once a call has returned.

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::bookmark::{normalize_url, Bookmark, LinkDraft};
use crate::config::LinksConfig;
use crate::error::LinkError;
use crate::seed::default_links;
use crate::storage::{KeyValueStorage, StorageError};

/// Called with the current collection after each mutation
pub type ChangeListener = Box<dyn FnMut(&[Bookmark])>;

/// A delete that has been requested but not yet confirmed.
///
/// Only `LinkStore::request_delete` hands these out. Dropping the token is
/// the same as answering "no".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDelete {
    id: String,
    title: String,
}

impl PendingDelete {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Title of the link at the time the delete was requested, for the prompt
    pub fn title(&self) -> &str {
        &self.title
    }
}

pub struct LinkStore<S> {
    links: Vec<Bookmark>,
    storage: S,
    config: LinksConfig,
    listener: Option<ChangeListener>,
}

impl<S: KeyValueStorage> LinkStore<S> {
    /// Load the persisted collection, falling back to the seed list.
    ///
    /// Never fails: a missing, empty or malformed entry is replaced by
    /// `default_links()`. The fallback is not written back until the first
    /// mutation.
    pub fn load(storage: S, config: LinksConfig) -> Self {
        let links = match storage.get(&config.links_key) {
            Ok(Some(raw)) if !raw.trim().is_empty() => {
                match serde_json::from_str::<Vec<Bookmark>>(&raw) {
                    Ok(links) => dedup_ids(links),
                    Err(e) => {
                        warn!("Stored links are unreadable, using defaults: {}", e);
                        default_links()
                    }
                }
            }
            Ok(_) => {
                debug!("No stored links, using defaults");
                default_links()
            }
            Err(e) => {
                warn!("Failed to read stored links, using defaults: {}", e);
                default_links()
            }
        };

        debug!(count = links.len(), "Loaded links");

        Self {
            links,
            storage,
            config,
            listener: None,
        }
    }

    /// Install the change listener, replacing any previous one
    pub fn subscribe(&mut self, listener: impl FnMut(&[Bookmark]) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn config(&self) -> &LinksConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Bookmark> {
        self.links.iter().find(|link| link.id == id)
    }

    /// Append a new link and return its generated id.
    ///
    /// The URL gets the default scheme if it has none.
    pub fn add(&mut self, draft: LinkDraft) -> Result<String, LinkError> {
        draft.validate()?;

        let id = self.generate_id();
        let url = normalize_url(&draft.url, &self.config.default_scheme);
        let bookmark = draft.into_bookmark(id.clone(), url);
        info!(id = %id, title = %bookmark.title, "Adding link");

        self.links.push(bookmark);
        if let Err(e) = self.persist() {
            self.links.pop();
            return Err(e);
        }

        self.notify();
        Ok(id)
    }

    /// Replace the fields of an existing link, keeping its id and position.
    ///
    /// Returns `Ok(false)` without touching anything when `id` is unknown.
    /// The URL is stored as entered (trimmed) and not re-normalized.
    pub fn update(&mut self, id: &str, draft: LinkDraft) -> Result<bool, LinkError> {
        draft.validate()?;

        let Some(index) = self.links.iter().position(|link| link.id == id) else {
            debug!(id, "Update for unknown link ignored");
            return Ok(false);
        };

        let url = draft.url.trim().to_string();
        let updated = draft.into_bookmark(id.to_string(), url);
        info!(id, title = %updated.title, "Updating link");

        let previous = std::mem::replace(&mut self.links[index], updated);
        if let Err(e) = self.persist() {
            self.links[index] = previous;
            return Err(e);
        }

        self.notify();
        Ok(true)
    }

    /// First half of a delete: look up the link and hand back a token to
    /// confirm. No state changes.
    pub fn request_delete(&self, id: &str) -> Option<PendingDelete> {
        self.find_by_id(id).map(|link| PendingDelete {
            id: link.id.clone(),
            title: link.title.clone(),
        })
    }

    /// Second half of a delete: remove the link the token refers to.
    ///
    /// Returns the removed record, or `None` if it is already gone.
    pub fn confirm_delete(&mut self, token: PendingDelete) -> Result<Option<Bookmark>, LinkError> {
        let Some(index) = self.links.iter().position(|link| link.id == token.id) else {
            return Ok(None);
        };

        let removed = self.links.remove(index);
        if let Err(e) = self.persist() {
            self.links.insert(index, removed);
            return Err(e);
        }

        info!(id = %removed.id, title = %removed.title, "Deleted link");
        self.notify();
        Ok(Some(removed))
    }

    /// Throw away all edits and go back to the seed list
    pub fn reset_to_defaults(&mut self) -> Result<(), LinkError> {
        let previous = std::mem::replace(&mut self.links, default_links());
        if let Err(e) = self.persist() {
            self.links = previous;
            return Err(e);
        }

        info!("Reset links to defaults");
        self.notify();
        Ok(())
    }

    fn persist(&mut self) -> Result<(), LinkError> {
        let json = serde_json::to_string(&self.links)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.storage.set(&self.config.links_key, &json).map_err(|e| {
            warn!("Failed to persist links: {}", e);
            LinkError::from(e)
        })
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.links);
        }
    }

    /// Millisecond timestamp plus a random suffix
    fn generate_id(&self) -> String {
        loop {
            let suffix = Uuid::new_v4().simple().to_string();
            let id = format!("{}-{}", Utc::now().timestamp_millis(), &suffix[..8]);
            if self.find_by_id(&id).is_none() {
                return id;
            }
        }
    }
}

/// Keep the first record for each id
fn dedup_ids(links: Vec<Bookmark>) -> Vec<Bookmark> {
    let mut seen = std::collections::HashSet::new();
    let before = links.len();
    let links: Vec<Bookmark> = links
        .into_iter()
        .filter(|link| seen.insert(link.id.clone()))
        .collect();
    if links.len() != before {
        warn!(dropped = before - links.len(), "Dropped links with duplicate ids");
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Storage whose writes always fail
    struct ReadOnlyStorage(MemoryStorage);

    impl KeyValueStorage for ReadOnlyStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            })
        }

        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    fn empty_store() -> LinkStore<MemoryStorage> {
        let config = LinksConfig::default();
        let storage = MemoryStorage::with_entry(config.links_key.clone(), "[]");
        LinkStore::load(storage, config)
    }

    #[test]
    fn test_load_missing_key_uses_defaults() {
        let store = LinkStore::load(MemoryStorage::new(), LinksConfig::default());
        assert_eq!(store.bookmarks(), default_links().as_slice());
        // Fallback is not written until something changes
        assert!(store.storage().is_empty());
    }

    #[test]
    fn test_load_garbage_uses_defaults() {
        let config = LinksConfig::default();
        let storage = MemoryStorage::with_entry(config.links_key.clone(), "{not json");
        let store = LinkStore::load(storage, config);
        assert_eq!(store.len(), default_links().len());
    }

    #[test]
    fn test_load_empty_array_stays_empty() {
        assert!(empty_store().is_empty());
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let config = LinksConfig::default();
        let raw = r#"[{"id":"a","title":"A","url":"https://a.com","description":"","icon":""},
                      {"id":"a","title":"B","url":"https://b.com","description":"","icon":""}]"#;
        let store = LinkStore::load(MemoryStorage::with_entry(config.links_key.clone(), raw), config);
        assert_eq!(store.len(), 1);
        assert_eq!(store.bookmarks()[0].title, "A");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let mut store = empty_store();
        for i in 0..50 {
            store
                .add(LinkDraft::new(format!("Link {i}"), "example.com", "", ""))
                .unwrap();
        }
        let ids: std::collections::HashSet<_> = store.bookmarks().iter().map(|l| &l.id).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_listener_sees_every_mutation() {
        let mut store = empty_store();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let seen = calls.clone();
        store.subscribe(move |links| seen.borrow_mut().push(links.len()));

        let id = store.add(LinkDraft::new("A", "a.com", "", "")).unwrap();
        store.update(&id, LinkDraft::new("A2", "a.com", "", "")).unwrap();
        let token = store.request_delete(&id).unwrap();
        store.confirm_delete(token).unwrap();

        assert_eq!(*calls.borrow(), vec![1, 1, 0]);
    }

    #[test]
    fn test_listener_not_called_for_noops() {
        let mut store = empty_store();
        let calls = Rc::new(RefCell::new(0));
        let seen = calls.clone();
        store.subscribe(move |_| *seen.borrow_mut() += 1);

        assert!(!store.update("missing", LinkDraft::new("A", "a.com", "", "")).unwrap());
        assert!(store.add(LinkDraft::new("", "a.com", "", "")).is_err());
        assert!(store.request_delete("missing").is_none());

        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_failed_write_rolls_back_add() {
        let config = LinksConfig::default();
        let inner = MemoryStorage::with_entry(config.links_key.clone(), "[]");
        let mut store = LinkStore::load(ReadOnlyStorage(inner), config);

        let result = store.add(LinkDraft::new("A", "a.com", "", ""));
        assert!(matches!(result, Err(LinkError::Storage(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_write_rolls_back_delete() {
        let mut store = LinkStore::load(
            ReadOnlyStorage(MemoryStorage::new()),
            LinksConfig::default(),
        );
        let before = store.bookmarks().to_vec();

        let token = store.request_delete("1").unwrap();
        assert!(store.confirm_delete(token).is_err());
        assert_eq!(store.bookmarks(), before.as_slice());
    }

    #[test]
    fn test_failed_write_rolls_back_update() {
        let mut store = LinkStore::load(
            ReadOnlyStorage(MemoryStorage::new()),
            LinksConfig::default(),
        );
        let before = store.bookmarks().to_vec();

        let result = store.update("2", LinkDraft::new("Renamed", "renamed.com", "", ""));
        assert!(matches!(result, Err(LinkError::Storage(_))));
        assert_eq!(store.bookmarks(), before.as_slice());
        assert_eq!(store.find_by_id("2"), before.iter().find(|l| l.id == "2"));
    }

    #[test]
    fn test_failed_write_rolls_back_reset() {
        let config = LinksConfig::default();
        let inner = MemoryStorage::with_entry(config.links_key.clone(), "[]");
        let mut store = LinkStore::load(ReadOnlyStorage(inner), config);
        let calls = Rc::new(RefCell::new(0));
        let seen = calls.clone();
        store.subscribe(move |_| *seen.borrow_mut() += 1);

        let result = store.reset_to_defaults();
        assert!(matches!(result, Err(LinkError::Storage(_))));
        assert!(store.is_empty());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_confirm_delete_twice_is_harmless() {
        let mut store = LinkStore::load(MemoryStorage::new(), LinksConfig::default());
        let token = store.request_delete("1").unwrap();

        assert!(store.confirm_delete(token.clone()).unwrap().is_some());
        assert_eq!(store.confirm_delete(token).unwrap(), None);
    }

    #[test]
    fn test_reset_to_defaults_persists() {
        let mut store = empty_store();
        store.reset_to_defaults().unwrap();
        assert_eq!(store.len(), default_links().len());

        let config = store.config().clone();
        let reloaded = LinkStore::load(store.into_storage(), config);
        assert_eq!(reloaded.bookmarks(), default_links().as_slice());
    }
}
