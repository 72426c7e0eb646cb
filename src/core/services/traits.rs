use crate::core::services::types::{BibliographyPayload, CollectionSummary, ExportScope, Fetched};
use crate::error::ApiError;
use async_trait::async_trait;

/// Trait for services that can list resources
#[async_trait]
pub trait ListService<T> {
    /// List all resources whose title contains `search`
    async fn list(&self, search: Option<&str>) -> Result<Fetched<Vec<T>>, ApiError>;
}

/// Trait for services that export items as BibTeX
#[async_trait]
pub trait ExportService {
    async fn export(&self, scope: &ExportScope) -> Result<Fetched<BibliographyPayload>, ApiError>;
}

/// Everything the dispatcher needs from a library backend
pub trait LibraryService: ListService<CollectionSummary> + ExportService + Send + Sync {}

impl<T> LibraryService for T where
    T: ListService<CollectionSummary> + ExportService + Send + Sync
{
}
