use crate::api::client::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, ZoteroClient};
use crate::core::services::traits::{ExportService, ListService};
use crate::core::services::types::{BibliographyPayload, CollectionSummary, ExportScope, Fetched};
use crate::error::ApiError;
use async_trait::async_trait;
use std::sync::Arc;

/// Collections and BibTeX export for one owner's library.
///
/// `limit` is the page size of every request (capped at `MAX_PAGE_SIZE`);
/// all pages are fetched.
pub struct CollectionService {
    client: Arc<ZoteroClient>,
    limit: Option<u32>,
}

impl CollectionService {
    pub fn new(client: Arc<ZoteroClient>, limit: Option<u32>) -> Self {
        Self { client, limit }
    }

    fn page_size(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE)
    }

    pub async fn list_collections(
        &self,
        title_filter: Option<&str>,
    ) -> Result<Fetched<Vec<CollectionSummary>>, ApiError> {
        let page_size = self.page_size();
        let mut start: u64 = 0;
        let mut collections = Vec::new();
        let mut raw = Vec::new();

        loop {
            let page = self.client.collections_page(start, page_size).await?;
            let received = page.body.len() as u64;

            raw.push(page.raw);
            collections.extend(page.body.into_iter().map(CollectionSummary::from));
            start += received;

            let done = match page.total_results {
                Some(total) => start >= total,
                None => received < u64::from(page_size),
            };
            if received == 0 || done {
                break;
            }
        }

        tracing::debug!(fetched = collections.len(), ?title_filter, "collections");

        Ok(Fetched {
            data: filter_by_title(collections, title_filter),
            raw,
        })
    }

    pub async fn fetch_bibliography(
        &self,
        collection_id: &str,
    ) -> Result<Fetched<BibliographyPayload>, ApiError> {
        self.fetch_bibtex(&ExportScope::Collection(collection_id.to_string()))
            .await
    }

    pub async fn fetch_all_bibliography(&self) -> Result<Fetched<BibliographyPayload>, ApiError> {
        self.fetch_bibtex(&ExportScope::Library).await
    }

    /// Pages through `scope` and joins the BibTeX. Nothing is returned if any
    /// page fails.
    async fn fetch_bibtex(
        &self,
        scope: &ExportScope,
    ) -> Result<Fetched<BibliographyPayload>, ApiError> {
        let path = scope.items_path();
        let page_size = self.page_size();
        let mut start: u64 = 0;
        let mut text = String::new();
        let mut raw = Vec::new();

        loop {
            let page = self.client.bibtex_page(&path, start, page_size).await?;
            raw.push(page.raw);

            // Notes and attachments have no BibTeX, so a page can be blank
            // while items remain.
            let blank = page.body.trim().is_empty();
            if !blank {
                append_page(&mut text, &page.body);
            }
            start += u64::from(page_size);

            let done = match page.total_results {
                Some(total) => {
                    tracing::info!("reading items = {} / {}", start.min(total), total);
                    start >= total
                }
                None => {
                    tracing::info!("reading items = {}", start);
                    blank
                }
            };
            if done {
                break;
            }
        }

        Ok(Fetched {
            data: BibliographyPayload { text },
            raw,
        })
    }
}

#[async_trait]
impl ListService<CollectionSummary> for CollectionService {
    async fn list(
        &self,
        search: Option<&str>,
    ) -> Result<Fetched<Vec<CollectionSummary>>, ApiError> {
        self.list_collections(search).await
    }
}

#[async_trait]
impl ExportService for CollectionService {
    async fn export(&self, scope: &ExportScope) -> Result<Fetched<BibliographyPayload>, ApiError> {
        match scope {
            ExportScope::Collection(id) => self.fetch_bibliography(id).await,
            ExportScope::Library => self.fetch_all_bibliography().await,
        }
    }
}

/// Keeps collections whose title contains `filter` (case-sensitive), in order.
pub fn filter_by_title(
    collections: Vec<CollectionSummary>,
    filter: Option<&str>,
) -> Vec<CollectionSummary> {
    match filter {
        Some(needle) => collections
            .into_iter()
            .filter(|c| c.title.contains(needle))
            .collect(),
        None => collections,
    }
}

/// Appends a page, separating it from the previous one by a blank line.
fn append_page(text: &mut String, page: &str) {
    if !text.is_empty() {
        text.truncate(text.trim_end().len());
        text.push_str("\n\n");
    }
    text.push_str(page);
}
