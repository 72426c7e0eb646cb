use crate::api::client::ZoteroClient;
use crate::cli::resolver::{Action, EffectiveRequest};
use crate::core::services::collection_service::CollectionService;
use crate::core::services::traits::LibraryService;
use crate::core::services::types::ExportScope;
use crate::display::{render_collections, write_bibliography, write_dump};
use crate::error::AppError;
use crate::map_display_error;
use std::io::{self, Write};
use std::sync::Arc;

/// Runs the single action of an `EffectiveRequest` against a library backend.
pub struct Dispatcher<S> {
    request: EffectiveRequest,
    service: S,
}

impl Dispatcher<CollectionService> {
    /// Dispatcher backed by the Zotero Web API.
    pub fn connect(request: EffectiveRequest) -> Result<Self, AppError> {
        let client = ZoteroClient::with_base_url(
            request.api_url.clone(),
            request.owner.clone(),
            request.api_key.clone(),
        )?;
        let service = CollectionService::new(Arc::new(client), request.limit);

        Ok(Self::new(request, service))
    }
}

impl<S: LibraryService> Dispatcher<S> {
    pub fn new(request: EffectiveRequest, service: S) -> Self {
        Self { request, service }
    }

    pub async fn dispatch(&self) -> Result<(), AppError> {
        let mut stdout = io::stdout();
        self.dispatch_to(&mut stdout).await
    }

    /// Writes the action's output to `out`, flushes it, then writes the dump
    /// file if one was requested.
    pub async fn dispatch_to<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        tracing::debug!(owner = %self.request.owner, action = ?self.request.action, "dispatch");

        let raw = match &self.request.action {
            Action::ListCollections { filter } => {
                let fetched = self.service.list(filter.as_deref()).await?;
                render_collections(out, &fetched.data)?;
                fetched.raw
            }
            Action::CollectionToBibtex { collection_id } => {
                let scope = ExportScope::Collection(collection_id.clone());
                let fetched = self.service.export(&scope).await?;
                write_bibliography(out, &fetched.data)?;
                fetched.raw
            }
            Action::AllToBibtex => {
                let fetched = self.service.export(&ExportScope::Library).await?;
                write_bibliography(out, &fetched.data)?;
                fetched.raw
            }
        };

        map_display_error!(out.flush(), "flush output")?;

        if let Some(path) = &self.request.dump_path {
            write_dump(path, &raw)?;
        }

        Ok(())
    }
}
