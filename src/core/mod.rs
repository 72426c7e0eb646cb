//! Core layer - domain types and the services that talk to the Zotero API.

pub mod owner;
pub mod services;
