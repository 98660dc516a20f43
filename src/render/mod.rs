//! View renderer: maps fetched records to display elements.
//!
//! DESIGN
//! ======
//! Builders in `insights` and `professor` are pure functions from optional
//! records to `Vec<Element>`, so every section degrades on its own. The only
//! local computation is `professor::publications_by_year`.

pub mod insights;
pub mod professor;
pub mod text;
pub mod widget;

pub use widget::{ChartSpec, Element, Series, Table};
