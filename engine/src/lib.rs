//! Search engine for Sieve - state machine and debounce scheduling.
//!
//! This crate contains the App state machine without TUI dependencies. The UI
//! calls the editing methods synchronously on every keystroke and drains
//! finished search cycles once per frame with [`App::process_search_events`].

mod scroll;
mod search;


use tokio::sync::mpsc;

pub use scroll::ResultScroll;
pub use search::SearchStats;
pub use sieve_config::SieveConfig;
pub use sieve_types::{
    FRUITS, Generation, ItemList, ResultSet, SearchDraft, SearchPhase, SearchTiming,
    ui::UiOptions,
};

use search::{ActiveCycle, SEARCH_EVENT_CHANNEL_CAPACITY, SearchEvent};

/// Upper bound on search events applied per frame.
const DEFAULT_SEARCH_EVENT_BUDGET: usize = 64;

/// The search widget's state.
///
/// Owns the search term (updated immediately), the published result set
/// (updated only when a cycle completes), and the single live cycle task.
/// Must be created inside a tokio runtime: editing spawns timer tasks.
#[derive(Debug)]
pub struct App {
    items: ItemList,
    timing: SearchTiming,
    ui_options: UiOptions,
    draft: SearchDraft,
    results: ResultSet,
    phase: SearchPhase,
    generation: Generation,
    last_published: Generation,
    active: Option<ActiveCycle>,
    tx: mpsc::Sender<SearchEvent>,
    rx: mpsc::Receiver<SearchEvent>,
    stats: SearchStats,
    completed_cycles: u64,
    scroll: ResultScroll,
    torn_down: bool,
    should_quit: bool,
    tick_count: usize,
}

impl App {
    #[must_use]
    pub fn new(items: ItemList, timing: SearchTiming) -> Self {
        let (tx, rx) = mpsc::channel(SEARCH_EVENT_CHANNEL_CAPACITY);
        Self {
            items,
            timing,
            ui_options: UiOptions::default(),
            draft: SearchDraft::default(),
            results: ResultSet::default(),
            phase: SearchPhase::Idle,
            generation: Generation::default(),
            last_published: Generation::default(),
            active: None,
            tx,
            rx,
            stats: SearchStats::default(),
            completed_cycles: 0,
            scroll: ResultScroll::default(),
            torn_down: false,
            should_quit: false,
            tick_count: 0,
        }
    }

    /// Build from the user config, applying `SIEVE_*` environment overrides.
    #[must_use]
    pub fn from_config(items: ItemList, config: Option<&SieveConfig>) -> Self {
        let timing = sieve_config::resolve_search_timing(config);
        let ui_options = config.map(SieveConfig::ui_options).unwrap_or_default();
        tracing::info!(
            debounce = ?timing.debounce,
            latency = ?timing.latency,
            items = items.len(),
            "Search engine configured"
        );
        Self::new(items, timing).with_ui_options(ui_options)
    }

    #[must_use]
    pub fn with_ui_options(mut self, ui_options: UiOptions) -> Self {
        self.ui_options = ui_options;
        self
    }

    #[must_use]
    pub fn items(&self) -> ItemList {
        self.items
    }

    #[must_use]
    pub fn timing(&self) -> SearchTiming {
        self.timing
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    /// The term as currently typed. May be ahead of [`App::results`].
    #[must_use]
    pub fn search_term(&self) -> &str {
        self.draft.text()
    }

    #[must_use]
    pub fn draft(&self) -> &SearchDraft {
        &self.draft
    }

    /// Results of the most recently completed cycle.
    #[must_use]
    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    #[must_use]
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Number of cycles whose results were published.
    #[must_use]
    pub fn completed_cycles(&self) -> u64 {
        self.completed_cycles
    }

    /// Number of filter scans executed, including any whose result was discarded.
    #[must_use]
    pub fn filter_passes(&self) -> u64 {
        self.stats.filter_passes()
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats.clone()
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    pub fn enter_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        if self.draft.enter_char(c) {
            self.schedule_search();
        }
    }

    /// Insert pasted text at the cursor. Line breaks become spaces.
    pub fn enter_text(&mut self, text: &str) {
        let text = sieve_types::sanitize_search_text(text);
        if self.draft.enter_text(&text) {
            self.schedule_search();
        }
    }

    pub fn delete_char(&mut self) {
        if self.draft.delete_char() {
            self.schedule_search();
        }
    }

    pub fn delete_char_forward(&mut self) {
        if self.draft.delete_char_forward() {
            self.schedule_search();
        }
    }

    pub fn delete_word_backwards(&mut self) {
        if self.draft.delete_word_backwards() {
            self.schedule_search();
        }
    }

    pub fn clear_search(&mut self) {
        if self.draft.clear() {
            self.schedule_search();
        }
    }

    /// Replace the whole term, as if it had been typed in one keystroke.
    ///
    /// The term is normalized like pasted text: tabs and line breaks become
    /// spaces and terminal escapes are dropped. [`App::search_term`] and the
    /// published [`ResultSet::term`] report the normalized value.
    pub fn set_search_term(&mut self, text: &str) {
        let text = sieve_types::sanitize_search_text(text);
        if self.draft.set_text(text.into_owned()) {
            self.schedule_search();
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.draft.move_cursor_left();
    }

    pub fn move_cursor_right(&mut self) {
        self.draft.move_cursor_right();
    }

    pub fn move_cursor_home(&mut self) {
        self.draft.move_cursor_home();
    }

    pub fn move_cursor_end(&mut self) {
        self.draft.move_cursor_end();
    }

    // ------------------------------------------------------------------
    // Search cycles
    // ------------------------------------------------------------------

    fn schedule_search(&mut self) {
        if self.torn_down {
            tracing::debug!("Ignoring edit after teardown");
            return;
        }

        if let Some(active) = self.active.take() {
            active.abort();
            tracing::debug!(generation = %active.generation(), "Search cycle cancelled");
        }

        self.generation = self.generation.next();
        self.active = Some(ActiveCycle::spawn(
            self.generation,
            self.draft.text().to_string(),
            self.items,
            self.timing,
            self.tx.clone(),
            self.stats.clone(),
        ));
        self.phase = SearchPhase::PendingDebounce;
        tracing::debug!(generation = %self.generation, "Search cycle scheduled");
    }

    /// Apply progress from cycle tasks. Call once per frame.
    pub fn process_search_events(&mut self) {
        if self.torn_down {
            return;
        }

        for _ in 0..DEFAULT_SEARCH_EVENT_BUDGET {
            let event = match self.rx.try_recv() {
                Ok(event) => event,
                Err(mpsc::error::TryRecvError::Empty) => break,
                Err(mpsc::error::TryRecvError::Disconnected) => {
                    tracing::warn!("Search channel disconnected");
                    self.active = None;
                    self.phase = SearchPhase::Idle;
                    break;
                }
            };
            self.apply_search_event(event);
        }
    }

    fn apply_search_event(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::FilterStarted(generation) if self.is_current(generation) => {
                self.phase = SearchPhase::PendingFilter;
            }
            // A cycle that finished filtering publishes even if a newer edit
            // has already superseded it, as long as nothing newer was shown.
            SearchEvent::Completed {
                generation,
                results,
            } if generation > self.last_published => {
                tracing::debug!(%generation, matches = results.len(), "Search results published");
                if self.is_current(generation) {
                    self.active = None;
                    self.phase = SearchPhase::Idle;
                }
                self.last_published = generation;
                self.results = results;
                self.completed_cycles += 1;
                self.scroll.reset();
            }
            SearchEvent::FilterStarted(generation) | SearchEvent::Completed { generation, .. } => {
                tracing::debug!(%generation, "Discarding stale search event");
            }
        }
    }

    fn is_current(&self, generation: Generation) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| active.generation() == generation)
    }

    /// Cancel the live cycle and stop accepting results.
    ///
    /// Idempotent. Also runs on drop.
    pub fn shutdown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        if let Some(active) = self.active.take() {
            active.abort();
            tracing::debug!(generation = %active.generation(), "Search cycle cancelled on teardown");
        }
        self.rx.close();
        self.phase = SearchPhase::Idle;
    }

    // ------------------------------------------------------------------
    // Result list scrolling
    // ------------------------------------------------------------------

    #[must_use]
    pub fn scroll(&self) -> ResultScroll {
        self.scroll
    }

    /// Report how many result rows the UI can show.
    pub fn set_results_viewport(&mut self, rows: usize) {
        self.scroll.set_viewport_rows(rows, self.results.len());
    }

    pub fn scroll_up(&mut self) {
        self.scroll.up(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll.down(1, self.results.len());
    }

    pub fn scroll_page_up(&mut self) {
        self.scroll.up(self.scroll.viewport_rows());
    }

    pub fn scroll_page_down(&mut self) {
        self.scroll
            .down(self.scroll.viewport_rows(), self.results.len());
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll.reset();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll.to_bottom(self.results.len());
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Advance the frame counter that drives the spinner.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}
