use clap::Parser;
use overseas_registries::{ExtractorConfig, Result};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "overseas-registries")]
#[command(about = "Lists the overseas company registries linked from a GOV.UK page as JSON")]
#[command(version)]
pub struct Args {
    /// Page to fetch (defaults to the GOV.UK overseas registries page)
    pub url: Option<String>,

    /// CSS selector for the links to record
    #[arg(short, long)]
    pub selector: Option<String>,

    /// JSON configuration file with `url` and `selector` fields
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Resolves the configuration: flags over config file over built-in defaults
    pub fn into_config(self) -> Result<ExtractorConfig> {
        let mut config = match &self.config {
            Some(path) => ExtractorConfig::from_file(path)?,
            None => ExtractorConfig::default(),
        };
        if let Some(url) = self.url {
            config.url = url;
        }
        if let Some(selector) = self.selector {
            config.selector = selector;
        }
        Ok(config)
    }
}
