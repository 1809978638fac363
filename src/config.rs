use derive_builder::Builder;

use crate::{
    mediawiki_api::{WIKIPEDIA_API, WikitextFetcher},
    reqwest_client::{DEFAULT_USER_AGENT, RustClient, RustError},
};

pub const DEFAULT_TITLE: &str = "Cat";
pub const DEFAULT_PREVIEW_CHARS: usize = 500;
pub const DEFAULT_MAX_REDIRECTS: u8 = 5;

/// Everything a run needs to know. Unset builder fields fall back to `Config::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(default, setter(into))]
pub struct Config {
    /// MediaWiki `api.php` to query.
    pub endpoint: String,
    pub user_agent: String,
    /// Page to fetch.
    pub title: String,
    /// How many characters of wikitext to print in preview mode.
    pub preview_chars: usize,
    pub max_redirects: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: WIKIPEDIA_API.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            title: DEFAULT_TITLE.to_string(),
            preview_chars: DEFAULT_PREVIEW_CHARS,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

impl Config {
    pub fn fetcher(&self) -> Result<WikitextFetcher, RustError> {
        let client = RustClient::new(Some(&self.user_agent))?;
        Ok(WikitextFetcher::new(client, self.endpoint.as_str()))
    }
}
