use crate::error::Error;
use crate::parsers::{compile_selector, extract_records};
use crate::results::Record;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_selector_is_an_error() {
        match compile_selector("div[") {
            Err(Error::Selector { selector, .. }) => assert_eq!(selector, "div["),
            other => panic!("expected selector error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_custom_selector() {
        let html = r#"
            <ul id="list">
              <li><a href="/one">One</a></li>
              <li><a href="/two">Two</a></li>
            </ul>"#;
        let selector = compile_selector("#list a").unwrap();
        assert_eq!(
            extract_records(html, &selector),
            vec![Record::new("One", "/one"), Record::new("Two", "/two")]
        );
    }
}
