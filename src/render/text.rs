//! Plain-text painter for terminal output.
//!
//! Charts become horizontal bar listings scaled to [`BAR_WIDTH`] cells; pie
//! and gauge charts become percentage readouts.

use super::widget::{ChartSpec, Element, Series, Table};

pub const BAR_WIDTH: usize = 40;
const BAR_FULL: char = '█';
const BAR_EMPTY: char = '·';

/// Paint elements top to bottom, one blank line between blocks.
#[must_use]
pub fn paint(elements: &[Element]) -> String {
    let blocks: Vec<String> = elements.iter().map(paint_element).collect();
    let mut out = blocks.join("\n");
    out.push('\n');
    out
}

fn paint_element(element: &Element) -> String {
    match element {
        Element::Heading { level, text } => paint_heading(*level, text),
        Element::Text(text) => text.clone(),
        Element::Metric { label, value } => format!("{label}: {value}"),
        Element::Table(table) => paint_table(table),
        Element::Chart(chart) => paint_chart(chart),
        Element::Error(message) => format!("error: {message}"),
    }
}

fn paint_heading(level: u8, text: &str) -> String {
    let width = text.chars().count();
    match level {
        0 | 1 => format!("\n{text}\n{}", "=".repeat(width)),
        2 => format!("\n{text}\n{}", "-".repeat(width)),
        _ => format!("{text}:"),
    }
}

fn paint_table(table: &Table) -> String {
    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.chars().count()).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(w) => *w = (*w).max(len),
                None => widths.push(len),
            }
        }
    }

    let mut out = String::new();
    out.push_str(&table_row(&table.columns, &widths));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&table_row(&rule, &widths));
    for row in &table.rows {
        out.push('\n');
        out.push_str(&table_row(row, &widths));
    }
    out
}

fn table_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect();
    padded.join(" | ").trim_end().to_owned()
}

fn paint_chart(chart: &ChartSpec) -> String {
    let mut out = format!("[{}]", chart.title());
    match chart {
        ChartSpec::Pie { slices, .. } => {
            let total: f64 = slices.iter().map(|(_, v)| v).sum();
            let label_width = slices.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
            for (label, value) in slices {
                let share = if total > 0.0 { value / total } else { 0.0 };
                out.push_str(&format!("\n{}  {:>5.1}%", pad(label, label_width), share * 100.0));
            }
        }
        ChartSpec::GroupedBar { categories, series, .. } => paint_grouped(&mut out, categories, series),
        ChartSpec::Bar { x_label, y_label, points, .. } | ChartSpec::Line { x_label, y_label, points, .. } => {
            out.push_str(&format!("\n{x_label} -> {y_label}"));
            paint_bars(&mut out, points);
        }
        ChartSpec::Gauge { value, max, threshold, .. } => {
            let filled = scaled(*value, *max);
            out.push_str(&format!(
                "\n{}{} {}/{} (threshold {})",
                BAR_FULL.to_string().repeat(filled),
                BAR_EMPTY.to_string().repeat(BAR_WIDTH - filled),
                format_value(*value),
                format_value(*max),
                format_value(*threshold),
            ));
        }
    }
    out
}

fn paint_bars(out: &mut String, points: &[(String, f64)]) {
    let max = points.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let label_width = points.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    for (label, value) in points {
        out.push_str(&format!(
            "\n{} | {} {}",
            pad(label, label_width),
            BAR_FULL.to_string().repeat(scaled(*value, max)),
            format_value(*value),
        ));
    }
}

fn paint_grouped(out: &mut String, categories: &[String], series: &[Series]) {
    let max = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0_f64, f64::max);
    let label_width = categories.iter().map(|c| c.chars().count()).max().unwrap_or(0);
    let series_width = series.iter().map(|s| s.name.chars().count()).max().unwrap_or(0);
    for (i, category) in categories.iter().enumerate() {
        for (j, s) in series.iter().enumerate() {
            let value = s.values.get(i).copied().unwrap_or(0.0);
            let label = if j == 0 { category.as_str() } else { "" };
            out.push_str(&format!(
                "\n{} {} | {} {}",
                pad(label, label_width),
                pad(&s.name, series_width),
                BAR_FULL.to_string().repeat(scaled(value, max)),
                format_value(value),
            ));
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn scaled(value: f64, max: f64) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    let cells = (value / max * BAR_WIDTH as f64).round() as usize;
    cells.min(BAR_WIDTH)
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

/// Whole numbers without decimals, everything else to two places.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
#[path = "text_test.rs"]
mod tests;
