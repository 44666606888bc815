//! Run with
//!
//! ```not_rust
//! cargo run -p http-fresh --example conditional-get --features examples
//! ```
//!
//! Then query the resource twice, passing back the validators from the first response:
//!
//! ```not_rust
//! curl -i http://127.0.0.1:3000/
//! curl -i -H 'If-None-Match: W/"v1"' http://127.0.0.1:3000/
//! ```

use axum::{
    body::Body,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use http::{
    header::{CONTENT_TYPE, ETAG, LAST_MODIFIED},
    HeaderMap, StatusCode,
};
use http_fresh::FreshnessExt;
use tracing::info;

/// The environment variable holding the address to listen on.
const DEMO_ADDR: &str = "HTTP_FRESH_DEMO_ADDR";

/// The address to listen on when none was configured.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("Starting example `{}`...", env!("CARGO_CRATE_NAME"));

    let addr = match std::env::var(DEMO_ADDR) {
        Ok(addr) if !addr.is_empty() => addr,
        Ok(_) | Err(std::env::VarError::NotPresent) => DEFAULT_ADDR.to_owned(),
        Err(err @ std::env::VarError::NotUnicode(_)) => {
            anyhow::bail!("environment variable {DEMO_ADDR} is invalid: {err}")
        }
    };

    let router = Router::new().route("/", get(handler));
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Listening on http://{addr}/");

    axum::serve(listener, router).await.map_err(Into::into)
}

async fn handler(request_headers: HeaderMap) -> Response {
    let response = http::Response::builder()
        .header(CONTENT_TYPE, "text/plain; charset=utf-8")
        .header(ETAG, "\"v1\"")
        .header(LAST_MODIFIED, "Sat, 01 Jan 2000 00:00:00 GMT")
        .body(Body::from("Hello, World!\n"));

    let mut response = match response {
        Ok(response) => response,
        Err(err) => {
            tracing::error!("Failed to build response: {err}");

            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let freshness = request_headers.freshness(&response);

    info!("Request is {freshness}");

    if freshness.is_fresh() {
        *response.status_mut() = StatusCode::NOT_MODIFIED;
        *response.body_mut() = Body::empty();
    }

    response
}
