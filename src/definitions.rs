use serde::{Deserialize, Serialize};

/// Top level of a `formatversion=2` `action=query` reply.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct WikiAPI {
    pub query: Option<WikiQuery>,
    pub error: Option<WikiApiError>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct WikiApiError {
    pub code: String,
    #[serde(default)]
    pub info: String,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct WikiQuery {
    /// A list with formatversion 2. The legacy numeric-keyed map won't decode into this.
    pub pages: Option<Vec<WikiPage>>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct WikiPage {
    pub title: Option<String>,
    #[serde(default)]
    pub missing: bool,
    #[serde(default)]
    pub invalid: bool,
    /// Absent when the page doesn't exist.
    pub revisions: Option<Vec<WikiRevision>>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct WikiRevision {
    pub slots: WikiSlots,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct WikiSlots {
    pub main: WikiSlot,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct WikiSlot {
    pub contentmodel: Option<String>,
    pub content: String,
}
