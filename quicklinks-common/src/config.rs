//! Dashboard configuration
//!
//! There is no config file. Hosts construct a `LinksConfig` (usually via
//! `Default`) and hand it to the store, the theme preference and the view
//! model builder.

/// Storage keys and external asset locations used by the dashboard
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinksConfig {
    /// Storage key holding the JSON-serialized bookmark collection
    pub links_key: String,
    /// Storage key holding the theme flag
    pub theme_key: String,
    /// Scheme prepended to URLs entered without `http://` or `https://`
    pub default_scheme: String,
    /// Favicon lookup URL; `{host}` is replaced by the bookmark's hostname
    pub favicon_service: String,
    /// Static icon shown when no favicon can be derived or loaded
    pub fallback_icon: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            links_key: "quickLinks".to_string(),
            theme_key: "theme".to_string(),
            default_scheme: "https://".to_string(),
            favicon_service: "https://www.google.com/s2/favicons?domain={host}&sz=64".to_string(),
            fallback_icon: "/assets/link.svg".to_string(),
        }
    }
}

impl LinksConfig {
    /// Favicon service URL for a hostname
    pub fn favicon_url(&self, host: &str) -> String {
        self.favicon_service.replace("{host}", host)
    }
}
