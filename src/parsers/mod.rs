pub mod html;

#[cfg(test)]
mod tests;

pub use html::{DEFAULT_SELECTOR, compile_selector, extract_records};
