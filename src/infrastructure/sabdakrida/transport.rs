use std::time::Duration;

use reqwest::{Client, Url};

pub const DEFAULT_SABDAKRIDA_URL: &str = "http://127.0.0.1:8010";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_ASSESSMENT_TIMEOUT: Duration = Duration::from_secs(90);

pub(super) fn http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .expect("reqwest client build never fails with valid TLS config")
}

/// Appends percent-encoded path segments, so ids such as `a/b` stay one
/// segment.
pub(super) fn endpoint_url(base_url: &str, segments: &[&str]) -> Result<Url, String> {
    let mut url = Url::parse(base_url).map_err(|e| format!("base url: {}", e))?;
    url.path_segments_mut()
        .map_err(|_| "base url cannot be a base".to_string())?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

pub(super) fn describe_send_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("timed out: {}", e)
    } else {
        e.to_string()
    }
}

pub(super) fn content_type_or(response: &reqwest::Response, default: &str) -> String {
    response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}
