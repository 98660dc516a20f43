//! GraphQL documents and response envelope for the `/graphql` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::ApiError;

pub const PROFESSOR_QUERY: &str = r"
query ($id: Int!) {
  professor(professorId: $id) {
    name
    affiliation
    hindex
    totalCitations
    scholarId
    publications {
      title
      year
      numCitations
    }
  }
}
";

pub const ALL_PROFESSORS_QUERY: &str = r"
query {
  allProfessors {
    id
    name
    scholarId
  }
}
";

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Pull `data.<field>` out of a decoded envelope.
///
/// Returns `Ok(None)` when the field is absent or `null` (e.g. an unknown
/// professor id). A non-empty `errors` array wins over any partial data.
///
/// # Errors
///
/// Returns [`ApiError::GraphQl`] for error envelopes and [`ApiError::Decode`]
/// when the field does not match `T`.
pub fn unwrap_field<T: serde::de::DeserializeOwned>(
    response: GraphQlResponse,
    field: &str,
) -> Result<Option<T>, ApiError> {
    if !response.errors.is_empty() {
        return Err(ApiError::GraphQl(
            response.errors.into_iter().map(|e| e.message).collect(),
        ));
    }
    let Some(mut data) = response.data else {
        return Ok(None);
    };
    match data.remove(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| ApiError::Decode(e.to_string())),
    }
}

#[cfg(test)]
#[path = "graphql_test.rs"]
mod tests;
