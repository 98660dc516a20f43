//! # scholarsync
//!
//! Terminal dashboard for the ScholarSync analytics API. Fetches professor
//! and publication statistics over REST and GraphQL, renders them as text
//! metrics, tables and charts, and runs a per-session chat with the API's
//! professor chat endpoint.

pub mod api;
pub mod chat;
pub mod config;
pub mod render;
pub mod views;

#[cfg(test)]
pub(crate) mod test_helpers;
