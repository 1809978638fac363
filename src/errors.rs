//! Error type for everything between "send the query" and "hand back a page".
//!
//! `ProcessError` separates the cases a caller may want to treat differently:
//! - `Transport` - the request never produced a usable response (network
//!    failure or a non-2xx status). Wraps `RustError`.
//! - `PageNotFound` - the API answered normally but the page has no revisions.
//! - `MalformedResponse` - the body was not the JSON shape we asked for.
//! - `Api` - MediaWiki replied with an `error` object.
//! - `Url` - the configured endpoint isn't a URL.
//! - `TooManyRedirects` - a `#REDIRECT` chain went past the configured limit.

use std::error::Error;
use std::fmt;

use url::ParseError;

use crate::reqwest_client::RustError;

#[derive(Debug)]
pub enum ProcessError {
    Transport(RustError),
    PageNotFound,
    MalformedResponse(String),
    Api { code: String, info: String },
    Url(ParseError),
    TooManyRedirects { title: String, limit: u8 },
}

impl ProcessError {
    /// Short name of the error kind, handy for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ProcessError::Transport(_) => "Transport",
            ProcessError::PageNotFound => "PageNotFound",
            ProcessError::MalformedResponse(_) => "MalformedResponse",
            ProcessError::Api { .. } => "Api",
            ProcessError::Url(_) => "Url",
            ProcessError::TooManyRedirects { .. } => "TooManyRedirects",
        }
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Transport(e) => write!(f, "{}", e),
            ProcessError::PageNotFound => write!(f, "Page has no revisions (may not exist)"),
            ProcessError::MalformedResponse(msg) => write!(f, "Malformed API response: {}", msg),
            ProcessError::Api { code, info } => write!(f, "API error {}: {}", code, info),
            ProcessError::Url(e) => write!(f, "Invalid endpoint: {}", e),
            ProcessError::TooManyRedirects { title, limit } => write!(
                f,
                "Too many redirects while resolving {:?} (limit {})",
                title, limit
            ),
        }
    }
}

impl Error for ProcessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ProcessError::Transport(e) => Some(e),
            ProcessError::Url(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RustError> for ProcessError {
    fn from(value: RustError) -> Self {
        Self::Transport(value)
    }
}
impl From<reqwest::Error> for ProcessError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(RustError::from(value))
    }
}
impl From<ParseError> for ProcessError {
    fn from(value: ParseError) -> Self {
        Self::Url(value)
    }
}
impl From<serde_json::Error> for ProcessError {
    fn from(value: serde_json::Error) -> Self {
        Self::MalformedResponse(value.to_string())
    }
}
impl From<&str> for ProcessError {
    fn from(value: &str) -> Self {
        Self::MalformedResponse(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_not_found_display() {
        let e = ProcessError::PageNotFound;
        assert_eq!(e.kind(), "PageNotFound");
        assert!(e.to_string().contains("no revisions"));
        assert!(e.source().is_none());
    }

    #[test]
    fn json_errors_become_malformed() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let e: ProcessError = json_err.into();
        assert_eq!(e.kind(), "MalformedResponse");
    }

    #[test]
    fn url_errors_keep_source() {
        let e: ProcessError = url::Url::parse("not a url").unwrap_err().into();
        assert_eq!(e.kind(), "Url");
        assert!(e.source().is_some());
    }
}
