//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests. Timing helpers assume a
//! paused tokio clock (`#[tokio::test(start_paused = true)]`).

#![allow(dead_code)]

use std::time::Duration;

use sieve_engine::{App, ItemList, SearchTiming};

/// App over the built-in catalog with the default 300ms + 500ms cycle.
pub fn fruit_app() -> App {
    App::new(ItemList::fruits(), SearchTiming::default())
}

/// Advance the paused clock by `ms`, then publish whatever completed.
pub async fn settle(app: &mut App, ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    tokio::task::yield_now().await;
    app.process_search_events();
}

/// Advance past one full default cycle.
pub async fn settle_cycle(app: &mut App) {
    let total = app.timing().total();
    let ms = u64::try_from(total.as_millis()).unwrap_or(u64::MAX);
    settle(app, ms + 10).await;
}

/// Type `text` one keystroke at a time with no delay between keys.
pub fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        app.enter_char(c);
    }
}
