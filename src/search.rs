//! Instant Search State
//!
//! Debounce bookkeeping, request sequencing and the result-panel view.
//! Timers and requests are driven by the component; this module only
//! decides what they are allowed to do.

use crate::models::SearchHit;

/// Quiet period after the last keystroke before a query is sent
pub const DEBOUNCE_MS: u32 = 300;
/// Queries need more than two characters
pub const MIN_QUERY_CHARS: usize = 3;

pub const SEARCHING_MESSAGE: &str = "Buscando...";
pub const NO_RESULTS_MESSAGE: &str = "No se encontraron productos";
pub const ERROR_MESSAGE: &str = "Error al buscar, intenta de nuevo";

/// What to do with the current input value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPlan {
    Clear,
    Query(String),
}

pub fn plan(input: &str) -> SearchPlan {
    let term = input.trim();
    if term.chars().count() < MIN_QUERY_CHARS {
        SearchPlan::Clear
    } else {
        SearchPlan::Query(term.to_string())
    }
}

/// Reaction to an input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Clear and hide immediately, no request
    ClearNow,
    /// Start (or restart) the debounce timer for `term`
    Schedule { generation: u64, term: String },
}

/// Content of the result panel
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchView {
    #[default]
    Idle,
    Searching,
    Hits(Vec<SearchHit>),
    NoResults,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    /// Bumped on every keystroke; only the newest timer may fire
    generation: u64,
    /// Bumped on every request and on clear; only the newest response lands
    seq: u64,
    view: SearchView,
    visible: bool,
}

impl SearchState {
    pub fn on_input(&mut self, raw: &str) -> InputAction {
        self.generation += 1;
        match plan(raw) {
            SearchPlan::Clear => {
                self.seq += 1;
                self.view = SearchView::Idle;
                self.visible = false;
                InputAction::ClearNow
            }
            SearchPlan::Query(term) => InputAction::Schedule {
                generation: self.generation,
                term,
            },
        }
    }

    /// A debounce timer elapsed. Returns the sequence number to tag the
    /// request with, or `None` if newer input superseded this timer.
    pub fn on_timer(&mut self, generation: u64) -> Option<u64> {
        if generation != self.generation {
            return None;
        }
        self.seq += 1;
        self.view = SearchView::Searching;
        self.visible = true;
        Some(self.seq)
    }

    /// Apply a response. Stale responses are dropped and `false` returned.
    pub fn on_response<E>(&mut self, seq: u64, result: Result<Vec<SearchHit>, E>) -> bool {
        if seq != self.seq {
            return false;
        }
        self.view = match result {
            Ok(hits) if hits.is_empty() => SearchView::NoResults,
            Ok(hits) => SearchView::Hits(hits),
            Err(_) => SearchView::Failed,
        };
        true
    }

    /// Hide the panel but keep its content
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Show the panel again if it has anything to show
    pub fn reveal(&mut self) {
        if self.view != SearchView::Idle {
            self.visible = true;
        }
    }

    pub fn view(&self) -> &SearchView {
        &self.view
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(name: &str) -> SearchHit {
        SearchHit {
            name: name.to_string(),
            price: "$10.00".to_string(),
            url: format!("/producto/{}/", name),
        }
    }

    /// Feed keystrokes then let every scheduled timer fire; return the
    /// terms that were actually requested.
    fn type_then_wait(state: &mut SearchState, keystrokes: &[&str]) -> Vec<String> {
        let mut timers = Vec::new();
        for input in keystrokes {
            if let InputAction::Schedule { generation, term } = state.on_input(input) {
                timers.push((generation, term));
            }
        }
        timers
            .into_iter()
            .filter_map(|(generation, term)| state.on_timer(generation).map(|_| term))
            .collect()
    }

    #[test]
    fn test_plan_threshold() {
        assert_eq!(plan(""), SearchPlan::Clear);
        assert_eq!(plan("  ab  "), SearchPlan::Clear);
        assert_eq!(plan("abc"), SearchPlan::Query("abc".into()));
        assert_eq!(plan(" llave "), SearchPlan::Query("llave".into()));
        // Counted in characters, not bytes
        assert_eq!(plan("ñá"), SearchPlan::Clear);
    }

    #[test]
    fn test_short_input_never_requests() {
        let mut state = SearchState::default();
        for input in ["", "a", "ab", " ab ", "ñá"] {
            assert_eq!(state.on_input(input), InputAction::ClearNow);
        }
        assert!(type_then_wait(&mut state, &["a", "ab"]).is_empty());
        assert!(!state.is_visible());
    }

    #[test]
    fn test_burst_of_keystrokes_sends_one_request() {
        let mut state = SearchState::default();
        let sent = type_then_wait(&mut state, &["tal", "tala", "talad", "taladro"]);
        assert_eq!(sent, vec!["taladro".to_string()]);
        assert_eq!(state.view(), &SearchView::Searching);
        assert!(state.is_visible());
    }

    #[test]
    fn test_each_pause_sends_one_request() {
        let mut state = SearchState::default();
        assert_eq!(type_then_wait(&mut state, &["pin", "pinz"]).len(), 1);
        assert_eq!(type_then_wait(&mut state, &["pinza"]).len(), 1);
    }

    #[test]
    fn test_clearing_cancels_pending_timer() {
        let mut state = SearchState::default();
        let InputAction::Schedule { generation, .. } = state.on_input("cable") else {
            panic!("expected a scheduled query");
        };
        assert_eq!(state.on_input("c"), InputAction::ClearNow);
        assert_eq!(state.on_timer(generation), None);
    }

    #[test]
    fn test_zero_results_shows_no_results() {
        let mut state = SearchState::default();
        type_then_wait(&mut state, &["xyzzy"]);
        assert!(state.on_response::<()>(1, Ok(vec![])));
        assert_eq!(state.view(), &SearchView::NoResults);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = SearchState::default();
        type_then_wait(&mut state, &["tor"]);
        let first = 1;
        type_then_wait(&mut state, &["tornillo"]);
        let second = 2;

        assert!(state.on_response::<()>(second, Ok(vec![hit("tornillo")])));
        // The slower first request answers last
        assert!(!state.on_response::<()>(first, Ok(vec![hit("tor"), hit("torno")])));
        assert_eq!(state.view(), &SearchView::Hits(vec![hit("tornillo")]));
    }

    #[test]
    fn test_response_after_clear_is_discarded() {
        let mut state = SearchState::default();
        type_then_wait(&mut state, &["broca"]);
        state.on_input("");
        assert!(!state.on_response::<()>(1, Ok(vec![hit("broca")])));
        assert_eq!(state.view(), &SearchView::Idle);
        assert!(!state.is_visible());
    }

    #[test]
    fn test_failure_renders_inline_error() {
        let mut state = SearchState::default();
        type_then_wait(&mut state, &["sierra"]);
        assert!(state.on_response(1, Err("500")));
        assert_eq!(state.view(), &SearchView::Failed);
    }

    #[test]
    fn test_hide_keeps_content() {
        let mut state = SearchState::default();
        type_then_wait(&mut state, &["lija"]);
        state.on_response::<()>(1, Ok(vec![hit("lija")]));
        state.hide();
        assert!(!state.is_visible());
        assert_eq!(state.view(), &SearchView::Hits(vec![hit("lija")]));

        state.reveal();
        assert!(state.is_visible());
    }

    #[test]
    fn test_reveal_without_content_stays_hidden() {
        let mut state = SearchState::default();
        state.reveal();
        assert!(!state.is_visible());
    }
}
