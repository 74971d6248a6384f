use crate::error::{Error, Result};
use reqwest::Client;
use std::io::Write;
use url::Url;

/// User agent sent with the page request
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client used for the page request.
///
/// Timeouts and redirect handling are left at the reqwest defaults.
pub fn build_client() -> Result<Client> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Ok(client)
}

/// Sends a single GET for `url` and returns the response body.
///
/// A `Visiting <url>` line is written to `out` before the request goes out.
/// Connection failures and non-2xx responses are errors; there are no retries.
pub async fn fetch<W: Write>(client: &Client, url: &Url, out: &mut W) -> Result<String> {
    writeln!(out, "Visiting {}", url)?;
    ::log::info!("Visiting {}", url);

    let response = client.get(url.clone()).send().await?;
    let status = response.status();
    if !status.is_success() {
        ::log::error!("Request to {} failed with status {}", url, status);
        return Err(Error::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await?;
    ::log::debug!("Fetched {} bytes from {}", body.len(), url);

    Ok(body)
}
