//! Display elements produced by the view builders.
//!
//! Builders only decide *what* to show; painting is left to `render::text`
//! (or any other surface that understands these types).

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Heading { level: u8, text: String },
    Text(String),
    Metric { label: String, value: String },
    Table(Table),
    Chart(ChartSpec),
    /// Banner shown in place of a section whose data is unavailable.
    Error(String),
}

impl Element {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading { level, text: text.into() }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn metric(label: impl Into<String>, value: impl ToString) -> Self {
        Self::Metric { label: label.into(), value: value.to_string() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Pie {
        title: String,
        slices: Vec<(String, f64)>,
        /// Donut hole as a fraction of the radius.
        hole: f64,
    },
    GroupedBar {
        title: String,
        categories: Vec<String>,
        series: Vec<Series>,
    },
    Bar {
        title: String,
        x_label: String,
        y_label: String,
        points: Vec<(String, f64)>,
    },
    Line {
        title: String,
        x_label: String,
        y_label: String,
        points: Vec<(String, f64)>,
    },
    Gauge {
        title: String,
        value: f64,
        max: f64,
        steps: Vec<(f64, f64)>,
        threshold: f64,
    },
}

impl ChartSpec {
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Pie { title, .. }
            | Self::GroupedBar { title, .. }
            | Self::Bar { title, .. }
            | Self::Line { title, .. }
            | Self::Gauge { title, .. } => title,
        }
    }
}

/// One named series of a grouped bar chart, aligned with its categories.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}
