//! Records returned by the analytics API.
//!
//! Statistics resources arrive as loosely-shaped JSON mappings. Each one is
//! decoded into a small typed record here; a missing key makes the whole
//! record unavailable rather than partially filled. Values themselves are
//! not checked: any number or `null` is accepted as a [`Stat`].

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// PROFESSORS (GraphQL)
// =============================================================================

/// Entry of the `allProfessors` list, used for selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorSummary {
    pub id: i64,
    pub name: String,
    pub scholar_id: String,
}

/// Full record returned by the `professor(professorId:)` query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorDetail {
    pub name: String,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(rename = "hindex", default)]
    pub h_index: Option<i64>,
    #[serde(default)]
    pub total_citations: Option<i64>,
    pub scholar_id: String,
    #[serde(default)]
    pub publications: Vec<Publication>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub num_citations: Option<i64>,
}

// =============================================================================
// STATISTICS (REST)
// =============================================================================

/// A numeric statistic as the backend sent it: integer, float or `null`.
///
/// The key must still be present; only its value is taken as-is. `null`
/// displays blank and charts as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Stat(pub Option<f64>);

impl Stat {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(Some(value))
    }

    /// Value for charting; `null` counts as zero.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0.unwrap_or(0.0)
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => Ok(()),
        }
    }
}

impl<'de> Deserialize<'de> for Stat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Decoding through `Value` keeps a missing key an error.
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Self(None)),
            Value::Number(number) => number
                .as_f64()
                .map(Self::new)
                .ok_or_else(|| D::Error::custom(format!("number {number} is not representable as f64"))),
            _ => Err(D::Error::custom("expected number or null")),
        }
    }
}

/// `/statistics/data_size_stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSizeStats {
    pub total_professors: Stat,
    pub total_publications: Stat,
    pub total_citations: Stat,
    pub average_publications_per_professor: Stat,
    pub average_citations_per_publication: Stat,
}

/// `/statistics/data_coverage_stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataCoverageStats {
    pub professors_with_publications: Stat,
    pub professors_with_citations: Stat,
    pub professors_with_public_access_info: Stat,
    pub professors_with_yearly_citations: Stat,
}

/// One row of `/top_professors`. Keys beyond the charted ones are kept for
/// the ranking table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProfessor {
    pub name: String,
    pub total_citations: Stat,
    pub h_index: Stat,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// One row of `/research_interests`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchInterest {
    pub interest: String,
    pub count: Stat,
}

/// `/yearly_data_growth`: year label to publication count, ordered by label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YearlyGrowth(pub BTreeMap<String, Stat>);

/// `/statistics/public_access_ratio`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicAccessRatio {
    pub public_access_ratio: Stat,
    pub total_publications: Stat,
    pub available: Stat,
    pub not_available: Stat,
}

// =============================================================================
// CHAT
// =============================================================================

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub question: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatReply {
    pub answer: String,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
