//! Core domain types for Sieve.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod catalog;
mod draft;
mod filter;
mod sanitize;
mod search;
pub mod ui;

pub use catalog::{FRUITS, ItemList};
pub use draft::SearchDraft;
pub use filter::{ResultSet, filter_items, matches_term};
pub use sanitize::sanitize_search_text;
pub use search::{DEFAULT_DEBOUNCE, DEFAULT_LATENCY, Generation, SearchPhase, SearchTiming};
