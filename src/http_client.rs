use std::time::Duration;

use bytes::Bytes;
use reqwest::{Client, ClientBuilder, StatusCode};

use crate::config::ScanConfig;
use crate::discover::Source;
use crate::errors::ScanError;

/// Build the client shared by every fetch task of a scan.
pub fn build_client(cfg: &ScanConfig) -> Result<Client, ScanError> {
    let client = ClientBuilder::new()
        // Timeouts
        .timeout(cfg.request_timeout())
        .connect_timeout(Duration::from_secs(10))

        // Compression
        .gzip(true)
        .brotli(true)

        .use_rustls_tls()
        .redirect(reqwest::redirect::Policy::limited(5))
        .user_agent(cfg.user_agent.as_str())
        .build()?;
    Ok(client)
}

/// GET `url` and return the body. Anything but a 200 is a fetch failure.
pub async fn fetch_body(client: &Client, source: Source, url: &str) -> Result<Bytes, ScanError> {
    let failed = |reason: String| ScanError::FetchFailed { provider: source, reason };

    tracing::debug!(%source, url, "fetching");
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| failed(format!("request failed: {e}")))?;

    let status = resp.status();
    if status != StatusCode::OK {
        return Err(failed(format!("received non-200 response code {status}")));
    }

    let body = resp
        .bytes()
        .await
        .map_err(|e| failed(format!("failed to read body: {e}")))?;
    tracing::debug!(%source, bytes = body.len(), "fetched");
    Ok(body)
}
