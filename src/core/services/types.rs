use crate::api::models::Collection;
use serde_json::Value;

/// A collection as shown by `--list-collections`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSummary {
    pub id: String,
    pub title: String,
}

impl CollectionSummary {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl From<Collection> for CollectionSummary {
    fn from(collection: Collection) -> Self {
        Self {
            id: collection.key,
            title: collection.data.name,
        }
    }
}

/// BibTeX as rendered by the server, passed through unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BibliographyPayload {
    pub text: String,
}

impl BibliographyPayload {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Raw API responses, one entry per page, for the debug dump.
pub type RawDump = Vec<Value>;

/// Typed result of a fetch together with the responses it was built from.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub data: T,
    pub raw: RawDump,
}

/// Which items an export covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportScope {
    Collection(String),
    Library,
}

impl ExportScope {
    /// Items path relative to the owner prefix.
    pub fn items_path(&self) -> String {
        match self {
            ExportScope::Collection(id) => format!("/collections/{}/items", id),
            ExportScope::Library => "/items".to_string(),
        }
    }
}
