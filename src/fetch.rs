//! HTTP fetching: one shared client, one GET helper.
//!
//! Both pipeline stages go through [`fetch_html`]; everything above this
//! module treats the web as an opaque `URL -> HTML` capability. Non-2xx
//! statuses are errors here so callers never have to inspect status codes:
//! a 404 on a listing page ends that source's pagination, a 404 on an
//! article becomes a Failure record.

use reqwest::Client;
use std::error::Error;
use std::time::Duration;
use tracing::debug;

/// Build the HTTP client shared by both pipeline stages.
///
/// Request and connect timeouts bound how long a single fetch can stall a
/// loop; there is no retry at this layer.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let user_agent = format!(
        "{}/{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .build()
}

/// GET a URL and return the response body.
///
/// # Errors
///
/// Network failures, timeouts, and non-2xx statuses all surface as errors.
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, Box<dyn Error>> {
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    debug!(%url, bytes = body.len(), "Fetched document");
    Ok(body)
}
