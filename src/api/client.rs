use crate::api::models::{Collection, Page};
use crate::core::owner::Owner;
use crate::error::ApiError;
use crate::utils::error_helpers::{
    convert_json_error, convert_request_error, convert_timeout_error,
};
use reqwest::{Client, Method, RequestBuilder, Response};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.zotero.org";
/// Page size used when no `--limit` is given; matches the server default.
pub const DEFAULT_PAGE_SIZE: u32 = 25;
/// Largest `limit` the server honours.
pub const MAX_PAGE_SIZE: u32 = 100;

const API_VERSION: &str = "3";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("zotero-cli/", env!("CARGO_PKG_VERSION"));
const TOTAL_RESULTS_HEADER: &str = "Total-Results";

#[derive(Debug, Clone)]
pub struct ZoteroClient {
    client: Client,
    pub base_url: String,
    pub owner: Owner,
    api_key: String,
}

impl ZoteroClient {
    pub fn with_base_url(
        base_url: String,
        owner: Owner,
        api_key: String,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| convert_request_error(e, "client_init"))?;

        Ok(ZoteroClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            owner,
            api_key,
        })
    }

    /// Build a request for `path` under the owner's library prefix.
    pub fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}{}", self.base_url, self.owner.api_prefix(), path);

        self.client
            .request(method, url)
            .header("Zotero-API-Key", &self.api_key)
            .header("Zotero-API-Version", API_VERSION)
    }

    /// One page of the owner's collections.
    pub async fn collections_page(
        &self,
        start: u64,
        limit: u32,
    ) -> Result<Page<Vec<Collection>>, ApiError> {
        let endpoint = "/collections";
        let query = [("start", start.to_string()), ("limit", limit.to_string())];

        let page = self.get_page(endpoint, &query).await?;
        let raw: serde_json::Value =
            serde_json::from_str(&page.body).map_err(|e| convert_json_error(e, endpoint))?;
        let collections: Vec<Collection> = serde_json::from_value(raw.clone())
            .map_err(|e| convert_json_error(e, endpoint))?;

        Ok(Page {
            body: collections,
            raw,
            total_results: page.total_results,
        })
    }

    /// One page of server-rendered BibTeX for the items under `path`
    /// (`/items` or `/collections/<id>/items`).
    pub async fn bibtex_page(
        &self,
        path: &str,
        start: u64,
        limit: u32,
    ) -> Result<Page<String>, ApiError> {
        let query = [
            ("format", "bibtex".to_string()),
            ("start", start.to_string()),
            ("limit", limit.to_string()),
        ];

        let page = self.get_page(path, &query).await?;

        Ok(Page {
            raw: serde_json::Value::String(page.body.clone()),
            body: page.body,
            total_results: page.total_results,
        })
    }

    async fn get_page(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<RawPage, ApiError> {
        tracing::debug!(owner = %self.owner, endpoint, ?query, "GET");

        let response = self
            .build_request(Method::GET, endpoint)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    convert_timeout_error(endpoint, DEFAULT_TIMEOUT_SECS)
                } else {
                    convert_request_error(e, endpoint)
                }
            })?;

        let total_results = response
            .headers()
            .get(TOTAL_RESULTS_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());

        let body = Self::handle_response(response, endpoint).await?;

        Ok(RawPage {
            body,
            total_results,
        })
    }

    /// Map a response to its body text or to the matching `ApiError`.
    pub async fn handle_response(response: Response, endpoint: &str) -> Result<String, ApiError> {
        let status = response.status();

        if status.is_success() {
            return response
                .text()
                .await
                .map_err(|e| convert_request_error(e, endpoint));
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        match status.as_u16() {
            401 | 403 => Err(ApiError::Unauthorized {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                server_message: error_text,
            }),
            408 | 504 => Err(convert_timeout_error(endpoint, DEFAULT_TIMEOUT_SECS)),
            _ => Err(ApiError::Http {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                message: error_text,
            }),
        }
    }
}

struct RawPage {
    body: String,
    total_results: Option<u64>,
}
