use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Starts a mock server that expects exactly one GET for `/registries` and
/// answers it with `status` and an HTML `body`.
///
/// The server stops when the returned [`MockServer`] is dropped.
pub async fn serve_page(status: u16, body: &str) -> (MockServer, Url) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/registries"))
        .respond_with(
            ResponseTemplate::new(status).set_body_raw(body.to_string(), "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let url = Url::parse(&format!("{}/registries", server.uri())).unwrap();
    (server, url)
}
