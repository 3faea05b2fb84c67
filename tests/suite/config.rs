//! Config file to engine wiring.

use std::io::Write;
use std::time::Duration;

use sieve_config::SieveConfig;
use sieve_engine::{App, ItemList};

use crate::common::settle;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp config");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[tokio::test(start_paused = true)]
async fn configured_timing_drives_cycle_length() {
    let file = write_config("[search]\ndebounce_ms = 100\nlatency_ms = 0\n");
    let config = SieveConfig::load_from(file.path()).expect("valid config");
    let timing = config.search_timing();
    assert_eq!(timing.total(), Duration::from_millis(100));

    let mut app = App::new(ItemList::fruits(), timing);
    app.set_search_term("quince");
    settle(&mut app, 110).await;

    assert_eq!(app.results().items(), &["Quince"]);
}

#[tokio::test(start_paused = true)]
async fn ui_options_flow_from_config() {
    let file = write_config("[app]\nascii_only = true\nhigh_contrast = true\n");
    let config = SieveConfig::load_from(file.path()).expect("valid config");

    let app = App::new(ItemList::fruits(), config.search_timing())
        .with_ui_options(config.ui_options());

    assert!(app.ui_options().ascii_only);
    assert!(app.ui_options().high_contrast);
}

#[tokio::test(start_paused = true)]
async fn app_from_loaded_config_applies_timing_and_ui_options() {
    let file = write_config(
        "[app]\nascii_only = true\n\n[search]\ndebounce_ms = 120\nlatency_ms = 30\n",
    );
    let config = SieveConfig::load_from(file.path()).expect("valid config");

    let mut app = App::from_config(ItemList::fruits(), Some(&config));
    assert_eq!(app.timing().debounce, Duration::from_millis(120));
    assert_eq!(app.timing().latency, Duration::from_millis(30));
    assert!(app.ui_options().ascii_only);
    assert!(!app.ui_options().high_contrast);

    app.set_search_term("date");
    settle(&mut app, 160).await;
    assert_eq!(app.results().items(), &["Date"]);
}

#[test]
fn broken_config_is_reported_with_path() {
    let file = write_config("[search]\nlatency_ms = -1\n");
    let err = SieveConfig::load_from(file.path()).expect_err("negative latency must not parse");
    assert_eq!(err.path(), file.path());
}
