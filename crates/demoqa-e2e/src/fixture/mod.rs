// Fixture web application
//
// A local stand-in for the practice site: same element ids and classes,
// same small behaviors (async tree mount, random button id, delayed
// enable/visibility, fetch-based link banner, modal forms), fixed statuses
// on the api endpoints. Binding port 0 keeps parallel test binaries from
// colliding.

mod html;

use std::net::SocketAddr;

use axum::{
    Router,
    body::Body,
    http::{Response, StatusCode, header},
    routing::get,
};
use tokio::task::JoinHandle;
use tracing::info;

/// Running fixture server handle.
pub struct FixtureServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl FixtureServer {
    /// Starts the fixture on a random available port.
    pub async fn start() -> Self {
        let app = Router::new()
            // Pages
            .route("/", get(html::home_page))
            .route("/elements", get(html::elements_page))
            .route("/text-box", get(html::text_box_page))
            .route("/checkbox", get(html::checkbox_page))
            .route("/radio-button", get(html::radio_button_page))
            .route("/webtables", get(html::web_tables_page))
            .route("/buttons", get(html::buttons_page))
            .route("/links", get(html::links_page))
            .route("/broken", get(html::broken_page))
            .route("/upload-download", get(html::upload_download_page))
            .route("/dynamic-properties", get(html::dynamic_properties_page))
            .route("/forms", get(html::forms_page))
            .route("/practice-form", get(html::practice_form_page))
            // Api endpoints with fixed statuses
            .route("/created", get(|| async { (StatusCode::CREATED, "") }))
            .route("/no-content", get(|| async { StatusCode::NO_CONTENT }))
            .route("/moved", get(moved))
            .route("/bad-request", get(|| async { (StatusCode::BAD_REQUEST, "") }))
            .route(
                "/unauthorized",
                get(|| async { (StatusCode::UNAUTHORIZED, "") }),
            )
            .route("/forbidden", get(|| async { (StatusCode::FORBIDDEN, "") }))
            .route("/invalid-url", get(|| async { (StatusCode::NOT_FOUND, "") }))
            .route(
                "/status/500",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "") }),
            )
            // Assets
            .route("/images/Toolsqa.jpg", get(valid_image))
            .route("/images/Toolsqa_1.jpg", get(missing_image))
            .route("/download/sampleFile.jpeg", get(sample_download));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fixture server");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Fixture server failed");
        });

        info!(%addr, "fixture server listening");
        FixtureServer { addr, handle }
    }

    /// Base URL of the fixture.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stops the fixture.
    pub fn shutdown(self) {
        self.handle.abort();
    }
}

// 301 without a Location header: fetch() hands the redirect response back
// to the page script unfollowed, so the banner reports 301 rather than the
// status of a follow-up request.
async fn moved() -> Response<Body> {
    Response::builder()
        .status(StatusCode::MOVED_PERMANENTLY)
        .body(Body::empty())
        .unwrap()
}

// An SVG with explicit dimensions decodes in an <img> and reports a
// non-zero natural width.
async fn valid_image() -> Response<Body> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/svg+xml")
        .body(Body::from(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="347" height="100">
  <rect width="347" height="100" fill="#2b6cb0"/>
  <text x="20" y="60" font-size="36" fill="white">TOOLSQA</text>
</svg>"##,
        ))
        .unwrap()
}

// HTML served at an image path never decodes; the image reports natural
// width 0, which is exactly how the real site's broken image fails.
async fn missing_image() -> Response<Body> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header(header::CONTENT_TYPE, "text/html")
        .body(Body::from("<!DOCTYPE html><html><body>Not Found</body></html>"))
        .unwrap()
}

async fn sample_download() -> Response<Body> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/jpeg")
        .header(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"sampleFile.jpeg\"",
        )
        .body(Body::from(&b"\xFF\xD8\xFF\xE0\x00\x10JFIF\x00\x01 demoqa sample \xFF\xD9"[..]))
        .unwrap()
}
