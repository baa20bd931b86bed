//! quicklinks-common - Pure data core for the quick links dashboard
//!
//! Holds the bookmark model, the Link Store and its storage seam, the card
//! view model and the theme preference. Nothing here touches the DOM, so the
//! whole data/view boundary can be exercised without a browser.

pub mod bookmark;
pub mod config;
pub mod error;
pub mod form;
pub mod seed;
pub mod storage;
pub mod store;
pub mod theme;
pub mod view;

pub use bookmark::{normalize_url, Bookmark, LinkDraft};
pub use config::LinksConfig;
pub use error::LinkError;
pub use form::{FormMode, LinkForm};
pub use seed::default_links;
pub use storage::{KeyValueStorage, MemoryStorage, StorageError};
pub use store::{LinkStore, PendingDelete};
pub use theme::{Theme, ThemeIcon, ThemePreference};
pub use view::{build_view, CardView, GridView};
