use serde::Deserialize;
use serde_json::Value;

// Collection models
#[derive(Debug, Deserialize, Clone)]
pub struct Collection {
    pub key: String,
    pub data: CollectionData,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CollectionData {
    pub name: String,
}

/// A single page of an API listing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub body: T,
    /// Response as received, kept for `--dump`
    pub raw: Value,
    /// `Total-Results` header, when the server sent one
    pub total_results: Option<u64>,
}
