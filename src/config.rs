use crate::error::{Error, Result};
use crate::parsers::DEFAULT_SELECTOR;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use url::Url;

/// Page listing the registries of overseas companies
pub const DEFAULT_URL: &str =
    "https://www.gov.uk/government/publications/overseas-registries/overseas-registries";

/// Configuration for a single page extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// URL of the page to fetch
    #[serde(default = "default_url")]
    pub url: String,

    /// CSS selector identifying the links to record
    #[serde(default = "default_selector")]
    pub selector: String,
}

/// Default value for url
fn default_url() -> String {
    DEFAULT_URL.to_string()
}

/// Default value for selector
fn default_selector() -> String {
    DEFAULT_SELECTOR.to_string()
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            selector: default_selector(),
        }
    }
}

impl ExtractorConfig {
    /// Create a configuration for `url` using the default selector
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            selector: default_selector(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Parses the configured URL
    pub fn target_url(&self) -> Result<Url> {
        Url::parse(&self.url).map_err(|source| Error::InvalidUrl {
            url: self.url.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::default();
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.selector, ".govspeak .govuk-link");
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = ExtractorConfig::from_json(r#"{"url": "https://example.org/"}"#).unwrap();
        assert_eq!(config.url, "https://example.org/");
        assert_eq!(config.selector, DEFAULT_SELECTOR);

        let config = ExtractorConfig::from_json("{}").unwrap();
        assert_eq!(config, ExtractorConfig::default());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            ExtractorConfig::from_json("not json"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"selector": "main a"}}"#).unwrap();

        let config = ExtractorConfig::from_file(file.path()).unwrap();

        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.selector, "main a");
    }

    #[test]
    fn test_from_file_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{\"url\": ").unwrap();

        assert!(matches!(
            ExtractorConfig::from_file(&path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            ExtractorConfig::from_file("/definitely/not/here.json"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_target_url() {
        let url = ExtractorConfig::default().target_url().unwrap();
        assert_eq!(url.host_str(), Some("www.gov.uk"));

        let config = ExtractorConfig::new("not a url");
        assert!(matches!(
            config.target_url(),
            Err(Error::InvalidUrl { .. })
        ));
    }
}
