//! Resource fetching for the Lantern container.
//!
//! Provides the blocking reads behind the host's default data provider:
//! HTTP(S) through `reqwest`, `data:` URLs, and local files (plain paths or
//! `file:` URLs).
//!
//! TODO: Implement proper Fetch Standard (<https://fetch.spec.whatwg.org/>)

use std::fs;
use std::time::Duration;

use ::url::Url;
use base64::Engine;

/// User-Agent header sent with all requests.
///
/// Mimics a common desktop browser to avoid basic bot detection.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default request timeout.
const TIMEOUT: Duration = Duration::from_secs(30);

/// Failure to fetch a resource.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP client could not be built or the request failed.
    #[error("request for '{url}' failed: {source}")]
    Http {
        /// The requested URL.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("HTTP error {status} for '{url}'")]
    Status {
        /// The requested URL.
        url: String,
        /// The response status.
        status: reqwest::StatusCode,
    },
    /// A `data:` URL could not be decoded.
    #[error("invalid data URL: {0}")]
    DataUrl(String),
    /// A local file could not be read.
    #[error("failed to read '{path}': {source}")]
    File {
        /// The path that was read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A parsed `data:` URL that can be decoded into raw bytes.
///
/// [RFC 2397](https://www.rfc-editor.org/rfc/rfc2397)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl<'a> {
    /// The media type and parameters before the comma (without `;base64`).
    pub media_type: &'a str,
    /// True when the payload is base64-encoded.
    pub base64: bool,
    /// The payload after the comma.
    pub payload: &'a str,
}

impl<'a> DataUrl<'a> {
    /// Split a `data:` URL into its metadata and payload.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::DataUrl`] if the URL is not a `data:` URL or has
    /// no comma separating metadata from payload.
    pub fn parse(raw: &'a str) -> Result<Self, FetchError> {
        let Some(rest) = raw.strip_prefix("data:") else {
            return Err(FetchError::DataUrl(format!("'{raw}' is not a data URL")));
        };
        let Some((metadata, payload)) = rest.split_once(',') else {
            return Err(FetchError::DataUrl("missing comma".to_string()));
        };
        let (media_type, base64) = metadata
            .strip_suffix(";base64")
            .map_or((metadata, false), |media_type| (media_type, true));
        Ok(Self {
            media_type,
            base64,
            payload,
        })
    }

    /// Decode the payload into raw bytes.
    ///
    /// Base64 payloads are decoded; anything else is percent-decoded.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::DataUrl`] if base64 decoding fails.
    pub fn decode(&self) -> Result<Vec<u8>, FetchError> {
        if self.base64 {
            base64::engine::general_purpose::STANDARD
                .decode(self.payload.trim())
                .map_err(|e| FetchError::DataUrl(format!("base64 decode error: {e}")))
        } else {
            Ok(percent_decode(self.payload))
        }
    }
}

/// Decode `%XX` escapes; malformed escapes are kept literally.
fn percent_decode(input: &str) -> Vec<u8> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && let Some(hex) = input.get(i + 1..i + 3)
            && let Ok(value) = u8::from_str_radix(hex, 16)
        {
            out.push(value);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }
    out
}

/// Fetch `url` and return its body as raw bytes.
///
/// Dispatches on the URL form: `http(s)` goes over the network, `data:` is
/// decoded in place, `file:` URLs and anything else are read from disk.
///
/// # Errors
///
/// Returns a [`FetchError`] describing the network, decoding, or file
/// failure.
pub fn fetch_bytes(url: &str) -> Result<Vec<u8>, FetchError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        fetch_http(url)
    } else if url.starts_with("data:") {
        DataUrl::parse(url)?.decode()
    } else {
        let path = Url::parse(url)
            .ok()
            .filter(|parsed| parsed.scheme() == "file")
            .and_then(|parsed| parsed.to_file_path().ok())
            .map_or_else(|| url.to_string(), |path| path.display().to_string());
        fs::read(&path).map_err(|source| FetchError::File { path, source })
    }
}

/// Blocking HTTP GET.
fn fetch_http(url: &str) -> Result<Vec<u8>, FetchError> {
    let http_error = |source| FetchError::Http {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(TIMEOUT)
        .build()
        .map_err(http_error)?;

    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .map_err(http_error)?;

    if !response.status().is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    response
        .bytes()
        .map(|b| b.to_vec())
        .map_err(http_error)
}
