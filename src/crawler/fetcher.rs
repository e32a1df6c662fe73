//! HTTP fetcher implementation
//!
//! Plain GET requests with transport defaults. There is no retry and no
//! timeout override; a non-2xx status is returned as data for the caller to
//! inspect.

use reqwest::Client;
use std::fmt;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// The server answered with a 2xx status
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Raw response body
        body: Vec<u8>,
    },

    /// The server answered with a non-2xx status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// No usable response (connection refused, timeout, broken body, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Returns true for a 2xx response
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The HTTP status, if the server answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Success { status_code, .. } | Self::HttpError { status_code } => {
                Some(*status_code)
            }
            Self::NetworkError { .. } => None,
        }
    }

    /// The body decoded for HTML parsing, if the fetch succeeded
    pub fn html(&self) -> Option<String> {
        match self {
            Self::Success { body, .. } => Some(decode_html(body)),
            _ => None,
        }
    }
}

impl fmt::Display for FetchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { status_code, .. } | Self::HttpError { status_code } => {
                write!(f, "HTTP {}", status_code)
            }
            Self::NetworkError { error } => write!(f, "{}", error),
        }
    }
}

/// Builds the HTTP client shared by every request of a run
///
/// No custom headers, cookies or timeouts are configured.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder().gzip(true).brotli(true).build()
}

/// Decodes a response body as UTF-8, replacing invalid sequences
pub fn decode_html(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}

/// Fetches a URL once
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The absolute URL to fetch
///
/// # Returns
///
/// A FetchResult carrying the body on 2xx, or the status / error otherwise
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => return classify_error(e),
    };

    let status = response.status();
    if !status.is_success() {
        return FetchResult::HttpError {
            status_code: status.as_u16(),
        };
    }

    let final_url = response.url().to_string();
    match response.bytes().await {
        Ok(body) => FetchResult::Success {
            final_url,
            status_code: status.as_u16(),
            body: body.to_vec(),
        },
        Err(e) => classify_error(e),
    }
}

fn classify_error(e: reqwest::Error) -> FetchResult {
    let error = if e.is_timeout() {
        "Request timeout".to_string()
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else {
        e.to_string()
    };
    FetchResult::NetworkError { error }
}
