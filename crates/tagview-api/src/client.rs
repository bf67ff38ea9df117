// Dashboard backend HTTP client
//
// Wraps `reqwest::Client` with backend-specific URL construction and
// response decoding. The backend's customization endpoints return the
// full store per scope; the *_for_* helpers do the client-side filtering
// the UI actually wants.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

use tagview_core::model::{BlockCustomization, EdgeCustomization, TagCustomization};

use crate::error::ApiError;
use crate::transport::TransportConfig;

/// Async client for the dashboard backend API.
///
/// All endpoints are plain unauthenticated GETs returning JSON. History
/// payloads are returned raw ([`Value`]) -- their shape varies by backend
/// version and is decoded by `tagview_core::history`.
pub struct DashboardClient {
    http: reqwest::Client,
    base_url: Url,
}

impl DashboardClient {
    /// Create a client for the given backend root (e.g. `https://host/api`).
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, ApiError> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Edges & telemetry ────────────────────────────────────────────

    /// List the ids of all known edges.
    pub async fn list_edges(&self) -> Result<Vec<String>, ApiError> {
        self.get_json("edges", &[]).await
    }

    /// Current tag values for one edge: a flat map of tag name → value.
    pub async fn current(&self, edge_id: &str) -> Result<Map<String, Value>, ApiError> {
        self.get_json("current", &[("edge", edge_id)]).await
    }

    /// Raw history payload for one edge. Shape varies; see
    /// `tagview_core::history::decode_history`.
    pub async fn history(&self, edge_id: &str) -> Result<Value, ApiError> {
        self.get_json("history", &[("edge", edge_id)]).await
    }

    // ── Customization store ──────────────────────────────────────────

    /// All edge-scoped customization entries.
    pub async fn edge_customizations(&self) -> Result<Vec<EdgeCustomization>, ApiError> {
        self.get_json("edge-customization", &[]).await
    }

    /// Edge-scoped entries for one edge (client-side filter).
    pub async fn edge_customizations_for(
        &self,
        edge_id: &str,
    ) -> Result<Vec<EdgeCustomization>, ApiError> {
        let all = self.edge_customizations().await?;
        Ok(all.into_iter().filter(|c| c.edge_id == edge_id).collect())
    }

    /// All block-scoped customization entries.
    pub async fn block_customizations(&self) -> Result<Vec<BlockCustomization>, ApiError> {
        self.get_json("block-customization", &[]).await
    }

    /// All tag-scoped customization entries.
    pub async fn tag_customizations(&self) -> Result<Vec<TagCustomization>, ApiError> {
        self.get_json("tag-customization", &[]).await
    }

    /// Tag-scoped entries for one edge (client-side filter).
    pub async fn tag_customizations_for_edge(
        &self,
        edge_id: &str,
    ) -> Result<Vec<TagCustomization>, ApiError> {
        let all = self.tag_customizations().await?;
        Ok(all.into_iter().filter(|c| c.edge_id == edge_id).collect())
    }

    /// Tag-scoped entries for one tag (client-side filter).
    pub async fn tag_customizations_for_tag(
        &self,
        edge_id: &str,
        tag_id: &str,
    ) -> Result<Vec<TagCustomization>, ApiError> {
        let all = self.tag_customizations().await?;
        Ok(all
            .into_iter()
            .filter(|c| c.edge_id == edge_id && c.tag_id == tag_id)
            .collect())
    }

    // ── Internals ────────────────────────────────────────────────────

    fn endpoint_url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, ApiError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/{path}"))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint_url(path, query)?;
        debug!(%url, "GET");

        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                path: path.to_owned(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}
