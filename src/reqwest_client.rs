#[cfg(test)]
use mockall::automock;
use reqwest::{IntoUrl, Response, StatusCode};
use std::{error::Error, fmt};
use url::Url;

/// Fallback user agent, used when nothing better is provided.
pub const DEFAULT_USER_AGENT: &str = "WikiKnowledgeSynth/0.1 (test@example.com)";

/// Anything that can turn a url into the text behind it.
#[cfg_attr(test, automock)]
pub trait TextClient {
    async fn get_text(&self, url: Url) -> Result<String, RustError>;
}

/// Custom struct as a wrapper for custom functions
#[derive(Debug, Clone)]
pub struct RustClient(pub reqwest::Client);

/// Custom error to include all potential reqwest related errors.
#[derive(Debug)]
pub enum RustError {
    /// The server answered, but not with a 2xx.
    Status { status: StatusCode, url: Url },
    Underly(reqwest::Error),
}

impl RustClient {
    /// Create a new client which always identifies itself with `user_agent`.
    ///
    /// # Arguments
    /// - user_agent -> Custom user agent to tell the server. Defaults to `WikiKnowledgeSynth/0.1 (test@example.com)`
    ///
    /// # Returns
    /// - a new client object to use, or the reason reqwest couldn't build one.
    pub fn new(user_agent: Option<&str>) -> Result<Self, RustError> {
        let client = reqwest::ClientBuilder::new()
            .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT))
            .build()?;
        Ok(Self(client))
    }

    /// Same as `new` but ignores any proxy in the environment, for talking to localhost.
    #[cfg(test)]
    pub fn local(user_agent: &str) -> Self {
        Self(
            reqwest::ClientBuilder::new()
                .user_agent(user_agent)
                .no_proxy()
                .build()
                .unwrap(),
        )
    }

    pub fn get<U>(&self, url: U) -> reqwest::RequestBuilder
    where
        U: IntoUrl,
    {
        self.0.get(url)
    }
}

/// Body of `response`, unless the status says the request failed.
async fn read_text(url: Url, response: Response) -> Result<String, RustError> {
    let status = response.status();
    log::debug!("{} -> {}", url, status);

    if !status.is_success() {
        return Err(RustError::Status { status, url });
    }
    Ok(response.text().await?)
}

impl TextClient for RustClient {
    /// Send a GET and return the body as text.
    ///
    /// # Arguments
    /// - url -> The url to request.
    ///
    /// # Returns
    /// - OK(String) -> The raw text of the response
    /// - Err(RustError) -> Either the connection broke or the status wasn't a success.
    async fn get_text(&self, url: Url) -> Result<String, RustError> {
        log::debug!("GET {}", url);
        let response = self.get(url.clone()).send().await?;
        read_text(url, response).await
    }
}

impl RustError {
    /// The HTTP status behind this error, if the server got far enough to send one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RustError::Status { status, .. } => Some(*status),
            RustError::Underly(e) => e.status(),
        }
    }
}

impl fmt::Display for RustError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RustError::Status { status, url } => write!(f, "{} returned {}", url, status),
            RustError::Underly(e) => write!(f, "request failed: {}", e),
        }
    }
}

impl Error for RustError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RustError::Status { .. } => None,
            RustError::Underly(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for RustError {
    fn from(value: reqwest::Error) -> Self {
        Self::Underly(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &'static str) -> Response {
        Response::from(
            http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    fn url() -> Url {
        Url::parse("https://en.wikipedia.org/w/api.php").unwrap()
    }

    #[tokio::test]
    async fn success_returns_body() {
        let body = read_text(url(), response(200, "hello")).await.unwrap();
        assert_eq!(body, "hello");
    }

    #[tokio::test]
    async fn non_success_keeps_status() {
        let err = read_text(url(), response(503, "busy")).await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
        assert!(matches!(err, RustError::Status { .. }));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn closed_port_is_underlying_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = RustClient::local("tester/1.0");
        let url = Url::parse(&format!("http://{}/w/api.php", addr)).unwrap();
        let err = client.get_text(url).await.unwrap_err();
        assert!(matches!(err, RustError::Underly(_)));
        assert_eq!(err.status(), None);
        assert!(err.source().is_some());
    }

    #[test]
    fn builds_with_default_agent() {
        assert!(RustClient::new(None).is_ok());
        assert!(RustClient::new(Some("tester/1.0")).is_ok());
    }
}
