//! Debounce cycle vocabulary shared by the engine and the UI.

use std::fmt;
use std::time::Duration;

/// Quiet period a keystroke must survive before filtering starts.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);
/// Simulated backend latency added after the debounce period.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// The two delays making up one search cycle.
///
/// Total latency from the last keystroke to visible results is
/// `debounce + latency`. A zero `latency` collapses the cycle to a plain
/// trailing-edge debounce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTiming {
    pub debounce: Duration,
    pub latency: Duration,
}

impl SearchTiming {
    #[must_use]
    pub const fn new(debounce: Duration, latency: Duration) -> Self {
        Self { debounce, latency }
    }

    #[must_use]
    pub const fn total(&self) -> Duration {
        self.debounce.saturating_add(self.latency)
    }
}

impl Default for SearchTiming {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE, DEFAULT_LATENCY)
    }
}

/// Where the most recent keystroke's cycle currently is.
///
/// `Idle -> PendingDebounce -> PendingFilter -> Idle`. Any keystroke returns to
/// `PendingDebounce`, discarding whatever cycle was in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    PendingDebounce,
    PendingFilter,
}

impl SearchPhase {
    #[must_use]
    pub const fn is_pending(self) -> bool {
        !matches!(self, Self::Idle)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "Ready",
            Self::PendingDebounce => "Typing",
            Self::PendingFilter => "Searching",
        }
    }
}

/// Monotonic tag identifying one scheduled cycle.
///
/// Results publish in generation order: an older cycle never replaces a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
