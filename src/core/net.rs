// src/core/net.rs

// Single-shot HTTP(S) GET. No retries; the caller decides whether to try again.

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

use crate::config::FetchOptions;
use crate::error::{Error, Result};

/// GET `url` with the configured browser user-agent and timeout.
///
/// Connection failures, timeouts and non-2xx statuses all surface as
/// [`Error::Fetch`] carrying the URL and the underlying cause.
pub fn http_get(url: &str, opts: &FetchOptions) -> Result<String> {
    let client = Client::builder()
        .timeout(opts.timeout)
        .build()
        .map_err(|e| fetch_error(url, e))?;

    logd!("GET {url}");
    let resp = client
        .get(url)
        .header(USER_AGENT, opts.user_agent.as_str())
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| fetch_error(url, e))?;

    resp.text().map_err(|e| fetch_error(url, e))
}

fn fetch_error(url: &str, source: reqwest::Error) -> Error {
    Error::Fetch { url: url.to_string(), source }
}
