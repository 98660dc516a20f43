//! Research Insights view: statistics sections followed by one professor.

use crate::api::types::{
    DataCoverageStats, DataSizeStats, PublicAccessRatio, ResearchInterest, TopProfessor, YearlyGrowth,
};
use crate::api::{
    ApiClient, DATA_COVERAGE_STATS_PATH, DATA_SIZE_STATS_PATH, PUBLIC_ACCESS_RATIO_PATH, RESEARCH_INTERESTS_PATH,
    TOP_PROFESSORS_PATH, YEARLY_DATA_GROWTH_PATH,
};
use crate::render::{Element, insights, professor};

/// Independent statistics records; any of them may be unavailable.
#[derive(Debug, Clone, Default)]
pub struct StatisticsSnapshot {
    pub data_size: Option<DataSizeStats>,
    pub data_coverage: Option<DataCoverageStats>,
    pub top_professors: Option<Vec<TopProfessor>>,
    pub research_interests: Option<Vec<ResearchInterest>>,
    pub yearly_growth: Option<YearlyGrowth>,
    pub public_access: Option<PublicAccessRatio>,
}

impl StatisticsSnapshot {
    /// Fetch every statistics resource, one after another.
    pub async fn fetch(client: &ApiClient) -> Self {
        Self {
            data_size: client.fetch_as(DATA_SIZE_STATS_PATH).await,
            data_coverage: client.fetch_as(DATA_COVERAGE_STATS_PATH).await,
            top_professors: client.fetch_as(TOP_PROFESSORS_PATH).await,
            research_interests: client.fetch_as(RESEARCH_INTERESTS_PATH).await,
            yearly_growth: client.fetch_as(YEARLY_DATA_GROWTH_PATH).await,
            public_access: client.fetch_as(PUBLIC_ACCESS_RATIO_PATH).await,
        }
    }

    #[must_use]
    pub fn sections(&self) -> Vec<Element> {
        let mut out = insights::overview(self.data_size.as_ref(), self.data_coverage.as_ref());
        out.push(Element::heading(1, "Research Insights"));
        out.extend(insights::top_researchers(self.top_professors.as_deref()));
        out.extend(insights::research_trends(
            self.research_interests.as_deref(),
            self.yearly_growth.as_ref(),
        ));
        out.extend(insights::accessibility(self.public_access.as_ref()));
        out
    }

    #[must_use]
    pub fn available(&self) -> usize {
        [
            self.data_size.is_some(),
            self.data_coverage.is_some(),
            self.top_professors.is_some(),
            self.research_interests.is_some(),
            self.yearly_growth.is_some(),
            self.public_access.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

/// Build the full Research Insights page.
///
/// `professor_id` picks the professor shown at the bottom; the first entry
/// of the professor list is used when it is `None`.
pub async fn research_insights(client: &ApiClient, professor_id: Option<i64>) -> Vec<Element> {
    let mut out = vec![
        Element::heading(1, "Research Data Insights Dashboard"),
        Element::text("Explore comprehensive insights into academic research trends and impact."),
    ];

    let snapshot = StatisticsSnapshot::fetch(client).await;
    tracing::info!(available = snapshot.available(), total = 6, "statistics fetched");
    out.extend(snapshot.sections());

    let Some(list) = client.fetch_all_professors().await.filter(|l| !l.is_empty()) else {
        out.push(Element::error(professor::PROFESSOR_LIST_ERROR));
        return out;
    };
    let Some(id) = professor_id.or_else(|| list.first().map(|p| p.id)) else {
        return out;
    };
    let detail = client.fetch_professor(id).await;
    out.extend(professor::professor_detail(detail.as_ref()));
    out
}

#[cfg(test)]
#[path = "insights_test.rs"]
mod tests;
