//! End-to-end search behavior through the engine's public API.

use sieve_engine::{ItemList, SearchPhase};
use sieve_types::filter_items;

use crate::common::{fruit_app, settle, settle_cycle, type_str};

#[tokio::test(start_paused = true)]
async fn cherry_returns_all_cherries_in_catalog_order() {
    let mut app = fruit_app();
    type_str(&mut app, "cherry");
    settle_cycle(&mut app).await;

    assert_eq!(
        app.results().items(),
        &[
            "Cherry",
            "Acerola Cherry",
            "Rainier Cherry",
            "Bing Cherry",
            "Sour Cherry",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn mango_then_mangos_runs_one_pass_for_final_value() {
    let mut app = fruit_app();
    type_str(&mut app, "Mango");
    settle(&mut app, 100).await;
    app.enter_char('s');
    settle_cycle(&mut app).await;

    assert_eq!(app.filter_passes(), 1);
    assert_eq!(app.results().term(), "Mangos");
    assert_eq!(app.results().items(), &["Mangosteen"]);
}

#[tokio::test(start_paused = true)]
async fn unmatched_term_publishes_empty_set() {
    let mut app = fruit_app();
    type_str(&mut app, "zzz");
    settle_cycle(&mut app).await;

    assert_eq!(app.completed_cycles(), 1);
    assert!(app.results().is_empty());
}

#[tokio::test(start_paused = true)]
async fn backspacing_to_empty_lists_everything() {
    let mut app = fruit_app();
    type_str(&mut app, "ki");
    settle_cycle(&mut app).await;
    assert_eq!(app.results().items(), &["Kiwi"]);

    app.delete_char();
    app.delete_char();
    settle_cycle(&mut app).await;

    assert_eq!(app.results().term(), "");
    assert_eq!(app.results().items(), ItemList::fruits().as_slice());
}

#[tokio::test(start_paused = true)]
async fn displayed_results_lag_the_typed_term() {
    let mut app = fruit_app();
    type_str(&mut app, "lemon");
    settle_cycle(&mut app).await;
    assert_eq!(app.results().items(), &["Lemon"]);

    app.enter_char('s');
    settle(&mut app, 400).await;

    assert_eq!(app.search_term(), "lemons");
    assert_eq!(app.phase(), SearchPhase::PendingFilter);
    assert_eq!(app.results().term(), "lemon");
    assert_eq!(app.results().items(), &["Lemon"]);
}

#[tokio::test(start_paused = true)]
async fn published_results_match_pure_filter_for_every_prefix() {
    let mut app = fruit_app();
    let term = "Passion Fruit";
    for (i, c) in term.char_indices() {
        app.enter_char(c);
        settle_cycle(&mut app).await;

        let typed = &term[..i + c.len_utf8()];
        assert_eq!(app.results().term(), typed);
        assert_eq!(
            app.results().items(),
            filter_items(ItemList::fruits(), typed).as_slice()
        );
    }
    assert_eq!(app.completed_cycles(), term.chars().count() as u64);
}

#[tokio::test(start_paused = true)]
async fn typing_burst_with_pauses_publishes_each_settled_value() {
    let mut app = fruit_app();
    type_str(&mut app, "gr");
    settle_cycle(&mut app).await;
    type_str(&mut app, "ape");
    settle(&mut app, 200).await;
    type_str(&mut app, "fruit");
    settle_cycle(&mut app).await;

    assert_eq!(app.completed_cycles(), 2);
    assert_eq!(app.filter_passes(), 2);
    assert_eq!(app.results().items(), &["Grapefruit"]);
}

#[tokio::test(start_paused = true)]
async fn teardown_mid_cycle_never_publishes() {
    let mut app = fruit_app();
    type_str(&mut app, "fig");
    let stats = app.stats();
    settle(&mut app, 500).await;

    app.shutdown();
    settle_cycle(&mut app).await;

    assert_eq!(stats.filter_passes(), 0);
    assert_eq!(app.completed_cycles(), 0);
    assert!(app.results().is_empty());
}
