use crate::{
    definitions::WikiAPI,
    errors::ProcessError,
    reqwest_client::{RustClient, TextClient},
};
use std::str::FromStr;
use url::{ParseError, Url};

/// English Wikipedia's action API.
pub const WIKIPEDIA_API: &str = "https://en.wikipedia.org/w/api.php";

// https://en.wikipedia.org/w/api.php?action=query&format=json&formatversion=2&prop=revisions&rvprop=content&rvslots=main&titles=Cat

/// Build the basic wiki api url of everything we need.
fn build_wiki_url(endpoint: &str) -> Result<Url, ParseError> {
    let mut url = Url::from_str(endpoint)?;
    url.query_pairs_mut()
        .append_pair("action", "query")
        .append_pair("format", "json")
        .append_pair("formatversion", "2")
        .finish();
    Ok(url)
}

/// The url asking for the main slot content of the latest revision of `title`.
pub fn build_revisions_url(endpoint: &str, title: &str) -> Result<Url, ParseError> {
    let mut url = build_wiki_url(endpoint)?;
    url.query_pairs_mut()
        .append_pair("prop", "revisions")
        .append_pair("rvprop", "content")
        .append_pair("rvslots", "main")
        .append_pair("titles", title)
        .finish();
    Ok(url)
}

/// Dig the wikitext out of a decoded reply.
///
/// A first page without `revisions` is how MediaWiki says the page doesn't exist, so that
/// becomes `PageNotFound`. Anything else missing along the way is a malformed reply.
pub fn extract_wikitext(api: WikiAPI) -> Result<String, ProcessError> {
    if let Some(error) = api.error {
        return Err(ProcessError::Api {
            code: error.code,
            info: error.info,
        });
    }

    let pages = api
        .query
        .ok_or("missing `query`")?
        .pages
        .ok_or("missing `query.pages`")?;
    let page = pages.into_iter().next().ok_or("`query.pages` is empty")?;

    let Some(revisions) = page.revisions else {
        log::debug!(
            "No revisions for {:?} (missing: {}, invalid: {})",
            page.title,
            page.missing,
            page.invalid
        );
        return Err(ProcessError::PageNotFound);
    };
    let revision = revisions
        .into_iter()
        .next()
        .ok_or("page has an empty `revisions` list")?;

    let main = revision.slots.main;
    log::debug!("{:?} has content model {:?}", page.title, main.contentmodel);
    Ok(main.content)
}

/// Fetches raw wikitext from one MediaWiki endpoint.
#[derive(Debug, Clone)]
pub struct WikitextFetcher<C = RustClient> {
    client: C,
    endpoint: String,
}

impl<C: TextClient> WikitextFetcher<C> {
    pub fn new<S: Into<String>>(client: C, endpoint: S) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get the raw wikitext of the latest revision of `title`.
    ///
    /// # Arguments
    /// - title -> The page to look up. Passed to the API as-is.
    ///
    /// # Returns
    /// - Ok(String) -> The content of the main slot, untouched.
    /// - Err(ProcessError) -> `Transport`, `PageNotFound`, `MalformedResponse` or `Api`.
    pub async fn fetch_wikitext(&self, title: &str) -> Result<String, ProcessError> {
        let url = build_revisions_url(&self.endpoint, title)?;
        let body = self.client.get_text(url).await.inspect_err(|e| {
            log::warn!("Request for {:?} failed (status: {:?})", title, e.status())
        })?;
        let api = serde_json::from_str::<WikiAPI>(&body)?;
        let content = extract_wikitext(api)?;
        log::debug!("Fetched {:?} ({} bytes)", title, content.len());
        Ok(content)
    }
}
