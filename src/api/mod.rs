//! Zotero Web API client and response models.

pub mod client;
pub mod models;
