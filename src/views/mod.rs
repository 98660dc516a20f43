//! The two navigable views.

pub mod chat;
pub mod insights;
