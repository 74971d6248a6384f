use crate::error::{Error, Result};
use crate::results::Record;
use scraper::{Html, Selector};

/// Links nested anywhere inside a govspeak body container
pub const DEFAULT_SELECTOR: &str = ".govspeak .govuk-link";

/// Compiles a CSS selector, reporting parse failures as [`Error::Selector`]
pub fn compile_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| Error::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Extracts one [`Record`] per element matching `selector`, in document order.
///
/// The label is the element's text with surrounding whitespace trimmed and the
/// target is its `href` attribute taken verbatim. Matches without an `href`
/// produce an empty target.
pub fn extract_records(html: &str, selector: &Selector) -> Vec<Record> {
    let doc = Html::parse_document(html);

    let records = doc
        .select(selector)
        .map(|element| {
            let text = element.text().collect::<String>();
            let href = element.value().attr("href").unwrap_or_default();
            Record::new(text.trim(), href)
        })
        .collect::<Vec<Record>>();

    ::log::debug!("HTML parser matched {} elements", records.len());
    if !records.is_empty() {
        ::log::debug!(
            "First few records: {:?}",
            records.iter().take(5).collect::<Vec<_>>()
        );
    }

    records
}
