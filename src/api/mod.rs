//! Fetch layer: outbound calls to the analytics API.
//!
//! DESIGN
//! ======
//! Every read normalizes failure to `None` so views need exactly one branch
//! ("render it, or show the banner"). Chat is the exception: transport
//! failures become the reply text so the transcript never breaks.

pub mod client;
pub mod error;
pub mod graphql;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;

// =============================================================================
// ENDPOINTS
// =============================================================================

pub const DATA_SIZE_STATS_PATH: &str = "/statistics/data_size_stats";
pub const DATA_COVERAGE_STATS_PATH: &str = "/statistics/data_coverage_stats";
pub const TOP_PROFESSORS_PATH: &str = "/top_professors";
pub const RESEARCH_INTERESTS_PATH: &str = "/research_interests";
pub const YEARLY_DATA_GROWTH_PATH: &str = "/yearly_data_growth";
pub const PUBLIC_ACCESS_RATIO_PATH: &str = "/statistics/public_access_ratio";
pub const GRAPHQL_PATH: &str = "/graphql";

#[must_use]
pub fn chat_path(professor_key: &str) -> String {
    format!("/chat/{professor_key}")
}

// =============================================================================
// CHAT BACKEND TRAIT
// =============================================================================

/// Anything that can answer a question about a professor. Enables mocking
/// the chat endpoint in controller tests.
#[async_trait::async_trait]
pub trait ChatBackend: Send + Sync {
    /// Ask `message` about the professor identified by `professor_key`.
    ///
    /// Infallible by contract: failures are returned as human-readable text.
    async fn chat(&self, professor_key: &str, message: &str) -> String;
}
