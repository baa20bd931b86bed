//! Bookmark record and the user-editable draft used to create or update one

use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

use crate::config::LinksConfig;
use crate::error::LinkError;

/// A saved link.
///
/// Optional fields are stored as empty strings so the persisted JSON always
/// carries the same five keys. Missing or `null` optional fields read as empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub icon: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Bookmark {
    /// Hostname of the bookmark's URL.
    ///
    /// URLs saved without a scheme (edits are not normalized) are parsed as if
    /// they were `https://`.
    pub fn hostname(&self) -> Option<String> {
        let url = self.url.trim();
        Url::parse(url)
            .ok()
            .filter(|parsed| parsed.has_host())
            .or_else(|| Url::parse(&format!("https://{url}")).ok())
            .and_then(|parsed| parsed.host_str().map(str::to_string))
            .filter(|host| !host.is_empty())
    }

    /// Text shown under the title: description, else hostname, else raw URL
    pub fn subtitle(&self) -> String {
        if !self.description.trim().is_empty() {
            return self.description.clone();
        }
        self.hostname().unwrap_or_else(|| self.url.clone())
    }

    /// Image source for the card icon
    pub fn icon_source(&self, config: &LinksConfig) -> String {
        if !self.icon.trim().is_empty() {
            return self.icon.clone();
        }
        match self.hostname() {
            Some(host) => config.favicon_url(&host),
            None => config.fallback_icon.clone(),
        }
    }
}

/// Form fields for a bookmark that has not been assigned an id yet
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkDraft {
    pub title: String,
    pub url: String,
    pub description: String,
    pub icon: String,
}

impl LinkDraft {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: description.into(),
            icon: icon.into(),
        }
    }

    /// Title and URL are required; everything else may be blank.
    pub fn validate(&self) -> Result<(), LinkError> {
        if self.title.trim().is_empty() {
            return Err(LinkError::MissingTitle);
        }
        if self.url.trim().is_empty() {
            return Err(LinkError::MissingUrl);
        }
        Ok(())
    }

    /// Build a record from this draft, trimming every field
    pub(crate) fn into_bookmark(self, id: String, url: String) -> Bookmark {
        Bookmark {
            id,
            title: self.title.trim().to_string(),
            url,
            description: self.description.trim().to_string(),
            icon: self.icon.trim().to_string(),
        }
    }
}

impl From<&Bookmark> for LinkDraft {
    fn from(bookmark: &Bookmark) -> Self {
        Self {
            title: bookmark.title.clone(),
            url: bookmark.url.clone(),
            description: bookmark.description.clone(),
            icon: bookmark.icon.clone(),
        }
    }
}

/// Prepend `default_scheme` unless the URL already starts with http(s)://
pub fn normalize_url(raw: &str, default_scheme: &str) -> String {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("{default_scheme}{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bookmark(url: &str, description: &str, icon: &str) -> Bookmark {
        Bookmark {
            id: "1".into(),
            title: "Title".into(),
            url: url.into(),
            description: description.into(),
            icon: icon.into(),
        }
    }

    #[test]
    fn test_normalize_adds_scheme() {
        assert_eq!(normalize_url("example.com", "https://"), "https://example.com");
    }

    #[test]
    fn test_normalize_keeps_existing_scheme() {
        assert_eq!(normalize_url("http://example.com", "https://"), "http://example.com");
        assert_eq!(normalize_url("HTTPS://Example.com", "https://"), "HTTPS://Example.com");
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize_url("  example.com ", "https://"), "https://example.com");
    }

    #[test]
    fn test_hostname_with_and_without_scheme() {
        assert_eq!(
            bookmark("https://github.com/rust-lang", "", "").hostname(),
            Some("github.com".to_string())
        );
        assert_eq!(
            bookmark("docs.rs/serde", "", "").hostname(),
            Some("docs.rs".to_string())
        );
    }

    #[test]
    fn test_subtitle_falls_back_to_hostname() {
        assert_eq!(bookmark("https://github.com", "", "").subtitle(), "github.com");
        assert_eq!(
            bookmark("https://github.com", "Code Repository", "").subtitle(),
            "Code Repository"
        );
    }

    #[test]
    fn test_icon_source_prefers_explicit_icon() {
        let config = LinksConfig::default();
        let explicit = bookmark("https://github.com", "", "https://cdn.example/icon.png");
        assert_eq!(explicit.icon_source(&config), "https://cdn.example/icon.png");

        let derived = bookmark("https://github.com", "", "");
        assert_eq!(derived.icon_source(&config), config.favicon_url("github.com"));
    }

    #[test]
    fn test_validate_requires_title_and_url() {
        assert_eq!(
            LinkDraft::new(" ", "example.com", "", "").validate(),
            Err(LinkError::MissingTitle)
        );
        assert_eq!(
            LinkDraft::new("Example", "", "", "").validate(),
            Err(LinkError::MissingUrl)
        );
        assert!(LinkDraft::new("Example", "example.com", "", "").validate().is_ok());
    }

    #[test]
    fn test_deserialize_missing_optional_fields() {
        let parsed: Bookmark =
            serde_json::from_str(r#"{"id":"a","title":"A","url":"https://a.com"}"#).unwrap();
        assert_eq!(parsed.description, "");
        assert_eq!(parsed.icon, "");
    }

    #[test]
    fn test_deserialize_null_optional_fields() {
        let parsed: Bookmark = serde_json::from_str(
            r#"{"id":"a","title":"A","url":"https://a.com","description":null,"icon":null}"#,
        )
        .unwrap();
        assert_eq!(parsed.description, "");
        assert_eq!(parsed.icon, "");
    }
}
