//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the pure display-list
//! derivation (dedup, exclusion, exact-ID search) it feeds from.

use leptos::*;
use std::collections::HashSet;

use crate::api::graph::InfectionEvent;

/// Token IDs filtered out client-side, on top of the query-level exclusion
pub const CLIENT_EXCLUDED_TOKENS: [u32; 2] = [1812, 375];

/// How long a taunt stays on screen
pub const TAUNT_DURATION_MS: u32 = 3750;

/// Viewport width at or below which the small-screen layout is used
pub const SMALL_SCREEN_MAX_WIDTH: f64 = 800.0;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Infection events as fetched from the subgraph, newest first
    pub infections: RwSignal<Vec<InfectionEvent>>,
    /// Raw search box text
    pub search: RwSignal<String>,
    /// Whether a search has been made since the last reset
    pub searched: RwSignal<bool>,
    /// Small-screen layout flag, tracks window resizes
    pub small_screen: RwSignal<bool>,
    /// True while the initial list query is in flight. Starts raised so the
    /// first frame shows the loading screen, not an empty list.
    pub loading: RwSignal<bool>,
    /// Active taunt line, if the Archivist has been clicked recently
    pub taunt: RwSignal<Option<String>>,
}

/// Derive the list to display: drop excluded tokens, keep the first event per
/// token in source order, then narrow to an exact token ID match when a
/// search term is present.
pub fn display_list(events: &[InfectionEvent], search: &str) -> Vec<InfectionEvent> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for event in events {
        let excluded = event
            .infected_token
            .parse::<u32>()
            .map(|id| CLIENT_EXCLUDED_TOKENS.contains(&id))
            .unwrap_or(false);
        if excluded {
            continue;
        }
        if seen.insert(event.infected_token.clone()) {
            unique.push(event.clone());
        }
    }

    let term = search.trim();
    if term.is_empty() {
        return unique;
    }

    match unique.iter().find(|e| e.infected_token == term) {
        Some(event) => vec![event.clone()],
        None => Vec::new(),
    }
}

impl GlobalState {
    pub fn new(small_screen: bool) -> Self {
        Self {
            infections: create_rw_signal(Vec::new()),
            search: create_rw_signal(String::new()),
            searched: create_rw_signal(false),
            small_screen: create_rw_signal(small_screen),
            loading: create_rw_signal(true),
            taunt: create_rw_signal(None),
        }
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new(viewport_is_small()));
}

/// Read the current viewport width against the breakpoint
pub fn viewport_is_small() -> bool {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map(|w| w <= SMALL_SCREEN_MAX_WIDTH)
        .unwrap_or(false)
}

impl GlobalState {
    /// The deduplicated, filtered list currently on screen
    pub fn displayed(&self) -> Vec<InfectionEvent> {
        display_list(&self.infections.get(), &self.search.get())
    }

    /// Whether the current search matched nothing
    pub fn search_missed(&self) -> bool {
        !self.search.get().trim().is_empty() && self.displayed().is_empty()
    }

    /// Clear the search box and restore the full list
    pub fn reset_search(&self) {
        self.search.set(String::new());
        self.searched.set(false);
    }

    /// Show a taunt line; ignored while one is already active. The line and
    /// the active flag clear together after the timeout.
    pub fn show_taunt(&self, line: &str) {
        if self.taunt.get_untracked().is_some() {
            return;
        }
        self.taunt.set(Some(line.to_string()));

        let taunt_signal = self.taunt;
        gloo_timers::callback::Timeout::new(TAUNT_DURATION_MS, move || {
            taunt_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::graph::Wallet;

    fn event(token: &str, sender: &str, timestamp: i64) -> InfectionEvent {
        InfectionEvent {
            infected_token: token.to_string(),
            sender: Wallet {
                id: sender.to_string(),
            },
            timestamp,
        }
    }

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        let events = vec![
            event("104", "0xaaa", 300),
            event("212", "0xbbb", 200),
            event("104", "0xccc", 100),
        ];

        let shown = display_list(&events, "");
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].infected_token, "104");
        assert_eq!(shown[0].sender.id, "0xaaa");
        assert_eq!(shown[1].infected_token, "212");
    }

    #[test]
    fn test_excluded_tokens_never_appear() {
        let events = vec![
            event("1812", "0xaaa", 300),
            event("375", "0xbbb", 200),
            event("42", "0xccc", 100),
        ];

        let shown = display_list(&events, "");
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].infected_token, "42");
    }

    #[test]
    fn test_search_exact_match_yields_single_record() {
        let events = vec![
            event("104", "0xaaa", 300),
            event("212", "0xbbb", 200),
        ];

        let shown = display_list(&events, "212");
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].infected_token, "212");
    }

    #[test]
    fn test_search_trims_whitespace() {
        let events = vec![event("104", "0xaaa", 300)];
        let shown = display_list(&events, "  104 ");
        assert_eq!(shown.len(), 1);
    }

    #[test]
    fn test_search_miss_yields_empty() {
        let events = vec![event("104", "0xaaa", 300)];
        assert!(display_list(&events, "9999").is_empty());
    }

    #[test]
    fn test_search_cannot_reach_excluded_token() {
        let events = vec![event("1812", "0xaaa", 300)];
        assert!(display_list(&events, "1812").is_empty());
    }

    #[test]
    fn test_clearing_search_restores_full_list() {
        let events = vec![
            event("104", "0xaaa", 300),
            event("212", "0xbbb", 200),
            event("104", "0xccc", 100),
        ];

        assert_eq!(display_list(&events, "212").len(), 1);
        assert_eq!(display_list(&events, "").len(), 2);
    }

    #[test]
    fn test_non_numeric_token_is_not_excluded() {
        let events = vec![event("not-a-number", "0xaaa", 300)];
        assert_eq!(display_list(&events, "").len(), 1);
    }

    #[test]
    fn test_fresh_state_gates_on_loading() {
        let runtime = create_runtime();

        let state = GlobalState::new(false);
        assert!(state.loading.get_untracked());
        assert!(state.infections.get_untracked().is_empty());
        assert!(state.taunt.get_untracked().is_none());

        runtime.dispose();
    }
}
