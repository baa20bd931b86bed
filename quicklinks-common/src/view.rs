//! Card view model
//!
//! `build_view` is a pure mapping from the collection to what the grid
//! shows. The rendering layer rebuilds from it on every change and keeps no
//! state of its own between renders.

use crate::bookmark::Bookmark;
use crate::config::LinksConfig;

/// Everything a single card needs to render
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub title: String,
    /// Description, or the hostname when there is none
    pub subtitle: String,
    /// Navigation target
    pub href: String,
    pub icon_src: String,
    /// Swapped in when `icon_src` fails to load
    pub fallback_icon_src: String,
}

impl CardView {
    pub fn from_bookmark(bookmark: &Bookmark, config: &LinksConfig) -> Self {
        Self {
            id: bookmark.id.clone(),
            title: bookmark.title.clone(),
            subtitle: bookmark.subtitle(),
            href: bookmark.url.clone(),
            icon_src: bookmark.icon_source(config),
            fallback_icon_src: config.fallback_icon.clone(),
        }
    }
}

/// What the link grid displays
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GridView {
    /// No links: show the empty-state indicator and no cards
    #[default]
    Empty,
    /// One card per link, in collection order
    Cards(Vec<CardView>),
}

impl GridView {
    pub fn cards(&self) -> &[CardView] {
        match self {
            GridView::Empty => &[],
            GridView::Cards(cards) => cards,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, GridView::Empty)
    }
}

pub fn build_view(bookmarks: &[Bookmark], config: &LinksConfig) -> GridView {
    if bookmarks.is_empty() {
        return GridView::Empty;
    }
    GridView::Cards(
        bookmarks
            .iter()
            .map(|bookmark| CardView::from_bookmark(bookmark, config))
            .collect(),
    )
}
