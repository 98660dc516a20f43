//! HTTP client for the analytics API.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use super::graphql::{self, GraphQlRequest, GraphQlResponse};
use super::types::{ChatReply, ChatRequest, ProfessorDetail, ProfessorSummary};
use super::{ChatBackend, GRAPHQL_PATH, chat_path};
use crate::config::DashboardConfig;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client rooted at `config.api_base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(config: &DashboardConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.api_base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // =========================================================================
    // REST
    // =========================================================================

    /// GET a statistics resource. `Some` only for HTTP 200 with a JSON body;
    /// the body is returned untouched.
    pub async fn fetch(&self, path: &str) -> Option<Value> {
        match self.get_json(path).await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(%path, error = %e, "fetch failed");
                None
            }
        }
    }

    /// `fetch` followed by a typed decode. A missing key is absence too.
    pub async fn fetch_as<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        let value = self.fetch(path).await?;
        match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(%path, error = %e, "unexpected response shape");
                None
            }
        }
    }

    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        read_json_200(response).await
    }

    // =========================================================================
    // GRAPHQL
    // =========================================================================

    /// Every professor available for selection.
    pub async fn fetch_all_professors(&self) -> Option<Vec<ProfessorSummary>> {
        self.query_field(graphql::ALL_PROFESSORS_QUERY, None, "allProfessors")
            .await
    }

    /// One professor with publications. Not cached; call again on reselect.
    pub async fn fetch_professor(&self, professor_id: i64) -> Option<ProfessorDetail> {
        let variables = serde_json::json!({ "id": professor_id });
        self.query_field(graphql::PROFESSOR_QUERY, Some(variables), "professor")
            .await
    }

    async fn query_field<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<Value>,
        field: &str,
    ) -> Option<T> {
        let result = self
            .post_graphql(&GraphQlRequest { query, variables })
            .await
            .and_then(|envelope| graphql::unwrap_field(envelope, field));
        match result {
            Ok(Some(record)) => Some(record),
            Ok(None) => {
                tracing::debug!(%field, "graphql field empty");
                None
            }
            Err(e) => {
                tracing::warn!(%field, error = %e, "graphql query failed");
                None
            }
        }
    }

    async fn post_graphql(&self, body: &GraphQlRequest<'_>) -> Result<GraphQlResponse, ApiError> {
        let value = self.post_json(GRAPHQL_PATH, body).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_json(&self, path: &str, body: &impl Serialize) -> Result<Value, ApiError> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        read_json_200(response).await
    }

    // =========================================================================
    // CHAT
    // =========================================================================

    async fn ask(&self, professor_key: &str, message: &str) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.url(&chat_path(professor_key)))
            .json(&ChatRequest { question: message })
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status: status.as_u16(), body });
        }
        let reply = response
            .json::<ChatReply>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(reply.answer)
    }
}

#[async_trait::async_trait]
impl ChatBackend for ApiClient {
    async fn chat(&self, professor_key: &str, message: &str) -> String {
        match self.ask(professor_key, message).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(%professor_key, error = %e, "chat request failed");
                error_reply(&e)
            }
        }
    }
}

/// Text shown in the assistant slot when the chat call fails.
#[must_use]
pub fn error_reply(error: &ApiError) -> String {
    format!("An error occurred: {error}")
}

async fn read_json_200(response: reqwest::Response) -> Result<Value, ApiError> {
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    if status != 200 {
        return Err(ApiError::Status { status, body: text });
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
