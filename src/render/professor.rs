//! Professor detail section: header facts, publication table, two charts.

use std::collections::BTreeMap;

use super::widget::{ChartSpec, Element, Table};
use crate::api::types::{ProfessorDetail, ProfessorSummary, Publication};

pub const PROFESSOR_LIST_ERROR: &str = "Failed to fetch the list of professors.";
pub const PROFESSOR_DETAIL_ERROR: &str = "Failed to fetch professor data.";

/// Count publications per year, ascending. One entry per distinct year;
/// publications without a year are not counted.
#[must_use]
pub fn publications_by_year(publications: &[Publication]) -> Vec<(i32, usize)> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for year in publications.iter().filter_map(|p| p.year) {
        *counts.entry(year).or_default() += 1;
    }
    counts.into_iter().collect()
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn professor_detail(detail: Option<&ProfessorDetail>) -> Vec<Element> {
    let Some(detail) = detail else {
        return vec![Element::error(PROFESSOR_DETAIL_ERROR)];
    };

    let mut out = vec![
        Element::heading(1, format!("Professor: {}", detail.name)),
        Element::text(format!("Affiliation: {}", or_blank(detail.affiliation.as_deref()))),
        Element::text(format!("H-index: {}", or_blank(detail.h_index))),
        Element::text(format!("Total Citations: {}", or_blank(detail.total_citations))),
        Element::heading(2, "Top Publications"),
        Element::Table(publication_table(&detail.publications)),
        Element::Chart(ChartSpec::Bar {
            title: "Citations per Publication".to_owned(),
            x_label: "Publication Title".to_owned(),
            y_label: "Number of Citations".to_owned(),
            points: detail
                .publications
                .iter()
                .map(|p| (p.title.clone(), p.num_citations.unwrap_or(0) as f64))
                .collect(),
        }),
    ];

    out.push(Element::Chart(ChartSpec::Line {
        title: "Publications Over Time".to_owned(),
        x_label: "Year".to_owned(),
        y_label: "Number of Publications".to_owned(),
        points: publications_by_year(&detail.publications)
            .into_iter()
            .map(|(year, count)| (year.to_string(), count as f64))
            .collect(),
    }));
    out
}

/// Selection list shown by the `professors` command.
#[must_use]
pub fn professor_list(list: Option<&[ProfessorSummary]>) -> Vec<Element> {
    let Some(list) = list.filter(|l| !l.is_empty()) else {
        return vec![Element::error(PROFESSOR_LIST_ERROR)];
    };
    vec![Element::Table(Table {
        columns: ["id", "name", "scholarId"].map(str::to_owned).into(),
        rows: list
            .iter()
            .map(|p| vec![p.id.to_string(), p.name.clone(), p.scholar_id.clone()])
            .collect(),
    })]
}

fn publication_table(publications: &[Publication]) -> Table {
    Table {
        columns: ["title", "year", "numCitations"].map(str::to_owned).into(),
        rows: publications
            .iter()
            .map(|p| vec![p.title.clone(), or_blank(p.year), or_blank(p.num_citations)])
            .collect(),
    }
}

fn or_blank<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
#[path = "professor_test.rs"]
mod tests;
