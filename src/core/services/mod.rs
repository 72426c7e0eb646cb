pub mod collection_service;
pub mod traits;
pub mod types;
