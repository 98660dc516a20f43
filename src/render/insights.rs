//! Section builders for the Research Insights statistics.
//!
//! Each section is built independently from whatever sources succeeded; a
//! missing source only replaces its own section with an error banner.

use serde_json::Value;

use super::widget::{ChartSpec, Element, Series, Table};
use crate::api::types::{
    DataCoverageStats, DataSizeStats, PublicAccessRatio, ResearchInterest, Stat, TopProfessor, YearlyGrowth,
};

pub const OVERVIEW_ERROR: &str = "Failed to fetch data from the API. Please check your connection and try again.";
pub const TOP_PROFESSORS_ERROR: &str = "Failed to fetch top professors data.";
pub const RESEARCH_INTERESTS_ERROR: &str = "Failed to fetch research interests data.";
pub const YEARLY_GROWTH_ERROR: &str = "Failed to fetch yearly growth data.";
pub const PUBLIC_ACCESS_ERROR: &str = "Failed to fetch public access ratio data.";

const OPEN_ACCESS_NOTE: &str = "Open access to research publications is crucial for advancing scientific \
knowledge and promoting collaboration. It ensures that research findings are accessible to a wider \
audience, including researchers, policymakers, and the general public.";

/// Key metrics plus the coverage pie. Needs both records.
#[must_use]
pub fn overview(size: Option<&DataSizeStats>, coverage: Option<&DataCoverageStats>) -> Vec<Element> {
    let mut out = vec![Element::heading(1, "Overview")];
    let (Some(size), Some(coverage)) = (size, coverage) else {
        out.push(Element::error(OVERVIEW_ERROR));
        return out;
    };

    out.extend([
        Element::metric("Total Professors", size.total_professors),
        Element::metric("Avg. Publications per Professor", format_decimal(size.average_publications_per_professor)),
        Element::metric("Total Publications", size.total_publications),
        Element::metric("Avg. Citations per Publication", format_decimal(size.average_citations_per_publication)),
        Element::metric("Total Citations", size.total_citations),
        Element::heading(2, "Data Coverage"),
        Element::Chart(coverage_pie(size.total_professors, coverage)),
    ]);
    out
}

fn coverage_pie(total_professors: Stat, coverage: &DataCoverageStats) -> ChartSpec {
    let total = total_professors.value();
    let share = |count: Stat| if total == 0.0 { 0.0 } else { count.value() / total };
    ChartSpec::Pie {
        title: "Professor Data Coverage".to_owned(),
        slices: vec![
            ("With Publications".to_owned(), share(coverage.professors_with_publications)),
            ("With Citations".to_owned(), share(coverage.professors_with_citations)),
            ("With Public Access Info".to_owned(), share(coverage.professors_with_public_access_info)),
            ("With Yearly Citations".to_owned(), share(coverage.professors_with_yearly_citations)),
        ],
        hole: 0.3,
    }
}

/// Grouped citations/h-index bars and the ranking table.
#[must_use]
pub fn top_researchers(top: Option<&[TopProfessor]>) -> Vec<Element> {
    let mut out = vec![Element::heading(2, "Top Researchers")];
    let Some(top) = top.filter(|t| !t.is_empty()) else {
        out.push(Element::error(TOP_PROFESSORS_ERROR));
        return out;
    };

    let categories = top.iter().map(|p| p.name.clone()).collect();
    out.push(Element::Chart(ChartSpec::GroupedBar {
        title: "Top 10 Researchers by Citations and H-index".to_owned(),
        categories,
        series: vec![
            Series { name: "Total Citations".to_owned(), values: top.iter().map(|p| p.total_citations.value()).collect() },
            Series { name: "H-index".to_owned(), values: top.iter().map(|p| p.h_index.value()).collect() },
        ],
    }));
    out.push(Element::Table(ranking_table(top)));
    out
}

fn ranking_table(top: &[TopProfessor]) -> Table {
    let mut extra_keys: Vec<&String> = top.iter().flat_map(|p| p.extra.keys()).collect();
    extra_keys.sort();
    extra_keys.dedup();

    let mut columns: Vec<String> = ["Rank", "name", "total_citations", "h_index"].map(str::to_owned).into();
    columns.extend(extra_keys.iter().map(|k| (*k).clone()));

    let rows = top
        .iter()
        .enumerate()
        .map(|(rank, p)| {
            let mut row = vec![rank.to_string(), p.name.clone(), p.total_citations.to_string(), p.h_index.to_string()];
            row.extend(extra_keys.iter().map(|k| p.extra.get(*k).map(cell_text).unwrap_or_default()));
            row
        })
        .collect();
    Table { columns, rows }
}

/// Interest bar chart and yearly growth line, each with its own banner.
#[must_use]
pub fn research_trends(interests: Option<&[ResearchInterest]>, growth: Option<&YearlyGrowth>) -> Vec<Element> {
    let mut out = vec![Element::heading(2, "Research Trends")];

    match interests.filter(|i| !i.is_empty()) {
        Some(interests) => out.push(Element::Chart(ChartSpec::Bar {
            title: "Top Research Interests".to_owned(),
            x_label: "interest".to_owned(),
            y_label: "count".to_owned(),
            points: interests.iter().map(|i| (i.interest.clone(), i.count.value())).collect(),
        })),
        None => out.push(Element::error(RESEARCH_INTERESTS_ERROR)),
    }

    match growth.filter(|g| !g.0.is_empty()) {
        Some(growth) => out.push(Element::Chart(ChartSpec::Line {
            title: "Publication Growth Over Years".to_owned(),
            x_label: "Year".to_owned(),
            y_label: "Number of Publications".to_owned(),
            points: growth.0.iter().map(|(year, count)| (year.clone(), count.value())).collect(),
        })),
        None => out.push(Element::error(YEARLY_GROWTH_ERROR)),
    }
    out
}

/// Public access gauge and counts.
#[must_use]
pub fn accessibility(ratio: Option<&PublicAccessRatio>) -> Vec<Element> {
    let mut out = vec![Element::heading(1, "Research Accessibility")];
    let Some(ratio) = ratio else {
        out.push(Element::error(PUBLIC_ACCESS_ERROR));
        return out;
    };

    out.extend([
        Element::Chart(ChartSpec::Gauge {
            title: "Public Access Ratio".to_owned(),
            value: ratio.public_access_ratio.value() * 100.0,
            max: 100.0,
            steps: vec![(0.0, 50.0), (50.0, 80.0), (80.0, 100.0)],
            threshold: 90.0,
        }),
        Element::heading(3, "Public Access Statistics"),
        Element::text(format!("Total Publications: {}", ratio.total_publications)),
        Element::text(format!("Publicly Available: {}", ratio.available)),
        Element::text(format!("Not Publicly Available: {}", ratio.not_available)),
        Element::heading(3, "Importance of Open Access"),
        Element::text(OPEN_ACCESS_NOTE),
    ]);
    out
}

fn format_decimal(value: Stat) -> String {
    let Stat(Some(value)) = value else {
        return String::new();
    };
    let rendered = format!("{value:.2}");
    rendered.trim_end_matches('0').trim_end_matches('.').to_owned()
}

pub(crate) fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "insights_test.rs"]
mod tests;
