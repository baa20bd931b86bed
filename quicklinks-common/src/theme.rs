//! Light/dark theme preference
//!
//! Persisted under its own key, independent of the link collection. The
//! stored value is `"dark"` or `"light"`; `"true"`/`"false"` are accepted
//! when reading.

use tracing::{info, warn};

use crate::config::LinksConfig;
use crate::storage::{KeyValueStorage, StorageError};

/// Class applied to the document root while the dark theme is active
pub const DARK_MODE_CLASS: &str = "dark-mode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Glyph on the toggle button: it shows the theme you would switch to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeIcon {
    Moon,
    Sun,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "dark" | "true" => Some(Theme::Dark),
            "light" | "false" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn root_class(self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some(DARK_MODE_CLASS),
        }
    }

    pub fn icon(self) -> ThemeIcon {
        match self {
            Theme::Light => ThemeIcon::Moon,
            Theme::Dark => ThemeIcon::Sun,
        }
    }
}

/// Theme flag bound to its storage entry
pub struct ThemePreference<S> {
    theme: Theme,
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> ThemePreference<S> {
    /// Read the saved theme. Missing or unrecognized values mean light.
    pub fn load(storage: S, config: &LinksConfig) -> Self {
        let theme = match storage.get(&config.theme_key) {
            Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_else(|| {
                warn!("Unrecognized theme value {:?}, using light", raw);
                Theme::Light
            }),
            Ok(None) => Theme::Light,
            Err(e) => {
                warn!("Failed to read theme: {}", e);
                Theme::Light
            }
        };

        Self {
            theme,
            storage,
            key: config.theme_key.clone(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    /// Flip the theme and persist it. The in-memory flag flips even if the
    /// write fails; the error is returned so the caller can log it.
    pub fn toggle(&mut self) -> Result<Theme, StorageError> {
        self.theme = self.theme.toggled();
        info!(theme = self.theme.as_str(), "Theme toggled");
        self.storage.set(&self.key, self.theme.as_str())?;
        Ok(self.theme)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
