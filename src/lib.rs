// Re-export modules
pub mod config;
pub mod crawlers;
pub mod error;
pub mod parsers;
pub mod results;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for convenience
pub use config::ExtractorConfig;
pub use error::{Error, Result};
pub use results::Record;

use std::io::Write;
use std::path::Path;

/// How a completed extraction ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The data line was written with this many records
    Completed(usize),
    /// Encoding the records failed; the error text was written instead
    SerializeFailed,
}

/// Builder for a single-page link extraction
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new extractor from a configuration
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Override the page URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.config.url = url.into();
        self
    }

    /// Override the CSS selector
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.config.selector = selector.into();
        self
    }

    /// Replace the configuration with one loaded from a JSON file
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.config = ExtractorConfig::from_file(path)?;
        Ok(self)
    }

    /// The configuration this extractor will run with
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Fetches the page and returns the matched records in document order.
    ///
    /// The URL and selector are validated before any request is sent.
    pub async fn extract<W: Write>(&self, out: &mut W) -> Result<Vec<Record>> {
        let url = self.config.target_url()?;
        let selector = parsers::compile_selector(&self.config.selector)?;

        let client = crawlers::build_client()?;
        let body = crawlers::fetch(&client, &url, out).await?;

        let records = parsers::extract_records(&body, &selector);
        ::log::info!("Extracted {} records from {}", records.len(), url);

        Ok(records)
    }

    /// Runs the extraction and writes the completion line to `out`.
    ///
    /// Fetch failures are returned as errors and leave no data line behind.
    /// A serialization failure is written to `out` as plain text and reported
    /// as [`Outcome::SerializeFailed`].
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<Outcome> {
        let records = self.extract(out).await?;
        write_completion(&records, out)
    }
}

/// Writes either the data line or the serialization error for `records`
pub fn write_completion<W: Write>(records: &[Record], out: &mut W) -> Result<Outcome> {
    write_outcome(results::completion_line(records), records.len(), out)
}

/// Writes a serialized completion line holding `count` records, or the text of
/// the error that replaced it.
///
/// Only I/O errors on `out` are returned; a failed serialization is written
/// out and reported as [`Outcome::SerializeFailed`].
pub fn write_outcome<W: Write>(
    line: Result<String>,
    count: usize,
    out: &mut W,
) -> Result<Outcome> {
    match line {
        Ok(line) => {
            writeln!(out, "{}", line)?;
            Ok(Outcome::Completed(count))
        }
        Err(e) => {
            ::log::error!("Failed to serialize records: {}", e);
            writeln!(out, "{}", e)?;
            Ok(Outcome::SerializeFailed)
        }
    }
}

/// Extracts the registry links from `target_url` and prints them to stdout
pub async fn run(target_url: &str) -> Result<Outcome> {
    let extractor = Extractor::new(ExtractorConfig::new(target_url));
    let mut stdout = std::io::stdout();
    extractor.run(&mut stdout).await
}
