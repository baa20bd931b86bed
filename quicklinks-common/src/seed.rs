//! Default links shown on first run, before anything has been saved

use crate::bookmark::Bookmark;

fn seed(id: &str, title: &str, url: &str, description: &str) -> Bookmark {
    Bookmark {
        id: id.to_string(),
        title: title.to_string(),
        url: url.to_string(),
        description: description.to_string(),
        icon: String::new(),
    }
}

/// The seed list used when storage holds no usable collection
pub fn default_links() -> Vec<Bookmark> {
    vec![
        seed("1", "GitHub", "https://github.com", "Code Repository"),
        seed("2", "Rust", "https://www.rust-lang.org", "Programming Language"),
        seed("3", "docs.rs", "https://docs.rs", "Crate Documentation"),
        seed("4", "Wikipedia", "https://www.wikipedia.org", "Encyclopedia"),
        seed("5", "YouTube", "https://www.youtube.com", ""),
        seed("6", "Gmail", "https://mail.google.com", "Email"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let links = default_links();
        let ids: HashSet<_> = links.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids.len(), links.len());
    }

    #[test]
    fn test_seed_entries_are_valid() {
        for link in default_links() {
            assert!(!link.title.is_empty());
            assert!(link.url.starts_with("https://"));
        }
    }
}
