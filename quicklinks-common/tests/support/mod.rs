use quicklinks_common::{Bookmark, LinksConfig, MemoryStorage};

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// Storage holding the given collection under the default links key
#[allow(dead_code)]
pub fn storage_with_links(links: &[Bookmark]) -> MemoryStorage {
    let config = LinksConfig::default();
    let json = serde_json::to_string(links).unwrap();
    MemoryStorage::with_entry(config.links_key, json)
}

#[allow(dead_code)]
pub fn github() -> Bookmark {
    Bookmark {
        id: "1".to_string(),
        title: "GitHub".to_string(),
        url: "https://github.com".to_string(),
        description: "Code Repository".to_string(),
        icon: String::new(),
    }
}
