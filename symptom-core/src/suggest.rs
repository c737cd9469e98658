//! Incremental symptom suggestions and the intake input state machine.

use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::details::{AnalysisRequest, Gender, HealthDetails};
use crate::selection::{AddOutcome, SelectionSet};
use crate::TrackerConfig;

/// Trim, lowercase and collapse whitespace runs to single spaces.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// A ranked candidate. Lower `sort_key` is the better match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    pub name: String,
    pub sort_key: usize,
}

/// Rank catalog entries containing `query`.
///
/// Prefix matches score `position`, interior matches `10 + position`, where
/// position counts characters. Equal scores keep catalog order. Entries in
/// `excluded` never appear and the result holds at most `limit` items.
pub fn suggest(query: &str, catalog: &Catalog, excluded: &[String], limit: usize) -> Vec<Suggestion> {
    let needle = normalize(query);
    if needle.is_empty() {
        return Vec::new();
    }

    let excluded: HashSet<String> = excluded.iter().map(|name| normalize(name)).collect();

    let mut ranked: Vec<Suggestion> = catalog
        .names()
        .iter()
        .filter(|name| !excluded.contains(&normalize(name)))
        .filter_map(|name| {
            let lower = name.to_lowercase();
            let byte_index = lower.find(&needle)?;
            let position = lower[..byte_index].chars().count();
            let prefix_penalty = if byte_index == 0 { 0 } else { 1 };
            Some(Suggestion {
                name: name.clone(),
                sort_key: prefix_penalty * 10 + position,
            })
        })
        .collect();

    ranked.sort_by_key(|suggestion| suggestion.sort_key);
    ranked.truncate(limit);
    ranked
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum InputState {
    #[default]
    Idle,
    Open,
}

/// Keys the intake input reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Tab,
    Escape,
    Backspace,
    Other,
}

impl IntakeKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key_name(key: &str) -> Self {
        match key {
            "ArrowDown" => IntakeKey::ArrowDown,
            "ArrowUp" => IntakeKey::ArrowUp,
            "Enter" => IntakeKey::Enter,
            "Tab" => IntakeKey::Tab,
            "Escape" | "Esc" => IntakeKey::Escape,
            "Backspace" => IntakeKey::Backspace,
            _ => IntakeKey::Other,
        }
    }
}

/// Whether the session handled a key, so the shell can suppress the
/// platform default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    Consumed,
    PassThrough,
}

/// User-facing messages raised by the intake session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntakeNotice {
    NoMatch,
    NeedsSelection,
    EmptySelection,
}

impl IntakeNotice {
    pub fn message(self) -> &'static str {
        match self {
            IntakeNotice::NoMatch => "No matching symptom found.",
            IntakeNotice::NeedsSelection => "Select from the list or use the quick options.",
            IntakeNotice::EmptySelection => "Add at least one symptom to continue.",
        }
    }
}

impl fmt::Display for IntakeNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Handed out on blur. Pass it back to [`IntakeSession::expire_blur`] once
/// `delay` has elapsed; any focus or keystroke in between invalidates it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlurTicket {
    pub generation: u64,
    pub delay: Duration,
}

/// Serializable snapshot of a session for rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntakeView {
    pub input: String,
    pub suggestions: Vec<Suggestion>,
    pub active_index: Option<usize>,
    pub open: bool,
    pub no_results: bool,
    pub notice: Option<String>,
    pub selected: Vec<String>,
}

/// State of one interactive intake: typed text, visible suggestions and the
/// symptoms chosen so far. Not meant to be shared between sessions.
#[derive(Debug, Clone)]
pub struct IntakeSession {
    catalog: Catalog,
    config: TrackerConfig,
    selection: SelectionSet,
    input: String,
    suggestions: Vec<Suggestion>,
    active: Option<usize>,
    state: InputState,
    notice: Option<IntakeNotice>,
    generation: u64,
    details: HealthDetails,
}

impl IntakeSession {
    pub fn new(catalog: Catalog, config: TrackerConfig) -> Self {
        Self {
            catalog,
            config,
            selection: SelectionSet::new(),
            input: String::new(),
            suggestions: Vec::new(),
            active: None,
            state: InputState::Idle,
            notice: None,
            generation: 0,
            details: HealthDetails::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn input_text(&self) -> &str {
        &self.input
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn state(&self) -> InputState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == InputState::Open
    }

    pub fn notice(&self) -> Option<IntakeNotice> {
        self.notice
    }

    pub fn details(&self) -> HealthDetails {
        self.details
    }

    pub fn set_age_input(&mut self, value: &str) {
        self.details.set_age_input(value);
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.details.gender = gender;
    }

    /// A query was typed but nothing in the catalog matched it.
    pub fn no_results(&self) -> bool {
        !normalize(&self.input).is_empty() && self.suggestions.is_empty()
    }

    pub fn view(&self) -> IntakeView {
        IntakeView {
            input: self.input.clone(),
            suggestions: self.suggestions.clone(),
            active_index: self.active,
            open: self.is_open(),
            no_results: self.no_results(),
            notice: self.notice.map(|notice| notice.message().to_string()),
            selected: self.selection.names().to_vec(),
        }
    }

    pub fn focus(&mut self) {
        self.generation += 1;
        self.refresh();
    }

    pub fn input(&mut self, text: &str) {
        self.generation += 1;
        self.input = text.to_string();
        self.notice = None;
        self.refresh();
    }

    pub fn key(&mut self, key: IntakeKey) -> KeyResponse {
        self.generation += 1;
        match key {
            IntakeKey::ArrowDown => {
                let count = self.suggestions.len();
                if count == 0 {
                    return KeyResponse::PassThrough;
                }
                self.state = InputState::Open;
                self.active = Some(match self.active {
                    Some(index) => (index + 1) % count,
                    None => 0,
                });
                KeyResponse::Consumed
            }
            IntakeKey::ArrowUp => {
                let count = self.suggestions.len();
                if count == 0 || !self.is_open() {
                    return KeyResponse::PassThrough;
                }
                self.active = Some(match self.active {
                    Some(index) => (index + count - 1) % count,
                    None => count - 1,
                });
                KeyResponse::Consumed
            }
            IntakeKey::Enter | IntakeKey::Tab => {
                if self.commit() {
                    KeyResponse::Consumed
                } else {
                    KeyResponse::PassThrough
                }
            }
            IntakeKey::Escape => {
                let was_open = self.is_open();
                self.close();
                if was_open {
                    KeyResponse::Consumed
                } else {
                    KeyResponse::PassThrough
                }
            }
            IntakeKey::Backspace => {
                if normalize(&self.input).is_empty() && self.selection.remove_last().is_some() {
                    KeyResponse::Consumed
                } else {
                    KeyResponse::PassThrough
                }
            }
            IntakeKey::Other => KeyResponse::PassThrough,
        }
    }

    pub fn blur(&mut self) -> BlurTicket {
        self.generation += 1;
        BlurTicket {
            generation: self.generation,
            delay: Duration::from_millis(self.config.blur_close_delay_ms),
        }
    }

    /// Close the list if `ticket` is still the latest event. Returns whether
    /// the list was closed.
    pub fn expire_blur(&mut self, ticket: BlurTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.close();
        true
    }

    /// Commit a suggestion the user clicked.
    pub fn select_suggestion(&mut self, name: &str) -> bool {
        self.commit_name(name)
    }

    /// Quick-option toggle: select `name` or unselect it if already chosen.
    /// Returns whether `name` is selected afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        let selected = if self.selection.remove_name(name).is_some() {
            false
        } else {
            match self.selection.add(&self.catalog, name) {
                AddOutcome::Unknown => {
                    self.notice = Some(IntakeNotice::NoMatch);
                    false
                }
                AddOutcome::Added | AddOutcome::AlreadyPresent => true,
            }
        };
        self.close();
        selected
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        self.selection.remove(index)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.notice = None;
    }

    /// Leave the symptom step: commit any typed text, then require at least
    /// one selected symptom.
    pub fn finish(&mut self) -> Result<Vec<String>, IntakeNotice> {
        self.notice = None;
        if !self.input.trim().is_empty() && !self.commit() {
            return Err(self.notice.unwrap_or(IntakeNotice::NoMatch));
        }
        if self.selection.is_empty() {
            self.notice = Some(IntakeNotice::EmptySelection);
            return Err(IntakeNotice::EmptySelection);
        }
        Ok(self.selection.names().to_vec())
    }

    /// Request body for the analyzer: the finished selection plus whatever
    /// health details were given.
    pub fn analysis_request(&mut self) -> Result<AnalysisRequest, IntakeNotice> {
        let symptoms = self.finish()?;
        Ok(AnalysisRequest::new(symptoms, self.details))
    }

    /// Discard everything but the catalog.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.details = HealthDetails::default();
        self.clear_input();
        self.generation += 1;
    }

    fn refresh(&mut self) {
        self.suggestions = suggest(
            &self.input,
            &self.catalog,
            self.selection.names(),
            self.config.suggestion_limit,
        );
        if self.suggestions.is_empty() {
            self.active = None;
            self.state = InputState::Idle;
        } else {
            self.active = Some(0);
            self.state = InputState::Open;
        }
    }

    fn commit(&mut self) -> bool {
        let candidate = if self.suggestions.is_empty() {
            normalize(&self.input)
        } else {
            let index = self.active.unwrap_or(0);
            self.suggestions
                .get(index)
                .map(|suggestion| suggestion.name.clone())
                .unwrap_or_default()
        };

        if candidate.is_empty() {
            self.notice = Some(IntakeNotice::NeedsSelection);
            return false;
        }
        self.commit_name(&candidate)
    }

    fn commit_name(&mut self, name: &str) -> bool {
        match self.selection.add(&self.catalog, name) {
            AddOutcome::Unknown => {
                debug!(input = name, "typed symptom has no catalog match");
                self.notice = Some(IntakeNotice::NoMatch);
                false
            }
            outcome => {
                debug!(symptom = name, ?outcome, "committed symptom");
                self.clear_input();
                true
            }
        }
    }

    fn close(&mut self) {
        self.state = InputState::Idle;
        self.active = None;
    }

    fn clear_input(&mut self) {
        self.input.clear();
        self.suggestions.clear();
        self.notice = None;
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog() -> Catalog {
        Catalog::new([
            "sore throat",
            "throat pain",
            "headache",
            "fever",
            "runny nose",
            "chest pain",
            "back pain",
        ])
    }

    fn session() -> IntakeSession {
        IntakeSession::new(catalog(), TrackerConfig::default())
    }

    #[test]
    fn analysis_request_carries_details_until_reset() {
        let mut session = session();
        assert_eq!(session.analysis_request(), Err(IntakeNotice::EmptySelection));

        session.toggle("fever");
        session.set_age_input("34");
        session.set_gender(Gender::Female);
        let request = session.analysis_request().unwrap();
        assert_eq!(request.symptoms, ["fever"]);
        assert_eq!(request.age, Some(34));
        assert_eq!(request.gender.label(), "Female");

        session.reset();
        assert_eq!(session.details(), HealthDetails::default());
        assert_eq!(session.details().gender.label(), "Prefer not to say");
        assert!(session.selection().is_empty());
    }

    fn names(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn normalize_trims_lowercases_and_collapses() {
        assert_eq!(normalize("  Sore \t  THROAT \n"), "sore throat");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn prefix_matches_rank_before_interior_matches() {
        let catalog = catalog();
        let ranked = suggest("throat", &catalog, &[], 8);
        assert_eq!(names(&ranked), ["throat pain", "sore throat"]);
        assert_eq!(ranked[0].sort_key, 0);
        assert_eq!(ranked[1].sort_key, 15);

        assert_eq!(names(&suggest("sor", &catalog, &[], 8)), ["sore throat"]);
    }

    #[test]
    fn interior_matches_order_by_position_then_catalog_order() {
        let catalog = catalog();
        let ranked = suggest("pain", &catalog, &[], 8);
        assert_eq!(names(&ranked), ["back pain", "chest pain", "throat pain"]);
    }

    #[test]
    fn empty_query_and_excluded_names_yield_nothing() {
        let catalog = catalog();
        assert!(suggest("   ", &catalog, &[], 8).is_empty());
        let excluded = vec!["Fever".to_string()];
        assert!(suggest("fev", &catalog, &excluded, 8).is_empty());
        assert!(suggest("zzz", &catalog, &[], 8).is_empty());
    }

    #[test]
    fn focus_and_typing_open_the_list_only_with_results() {
        let mut session = session();
        session.focus();
        assert_eq!(session.state(), InputState::Idle);
        assert!(!session.no_results());

        session.input("pa");
        assert!(session.is_open());
        assert_eq!(session.active_index(), Some(0));

        session.input("xyz");
        assert_eq!(session.state(), InputState::Idle);
        assert!(session.no_results());
    }

    #[test]
    fn arrows_wrap_around() {
        let mut session = session();
        session.input("pain");
        assert_eq!(session.suggestions().len(), 3);

        assert_eq!(session.key(IntakeKey::ArrowUp), KeyResponse::Consumed);
        assert_eq!(session.active_index(), Some(2));
        session.key(IntakeKey::ArrowDown);
        assert_eq!(session.active_index(), Some(0));
        session.key(IntakeKey::ArrowDown);
        session.key(IntakeKey::ArrowDown);
        session.key(IntakeKey::ArrowDown);
        assert_eq!(session.active_index(), Some(0));
    }

    #[test]
    fn arrows_do_nothing_without_suggestions() {
        let mut session = session();
        assert_eq!(session.key(IntakeKey::ArrowDown), KeyResponse::PassThrough);
        assert_eq!(session.key(IntakeKey::ArrowUp), KeyResponse::PassThrough);
        assert_eq!(session.active_index(), None);
    }

    #[test]
    fn enter_commits_active_suggestion_and_resets_input() {
        let mut session = session();
        session.input("pain");
        session.key(IntakeKey::ArrowDown);
        assert_eq!(session.key(IntakeKey::Enter), KeyResponse::Consumed);

        assert_eq!(session.selection().names(), &["chest pain"]);
        assert_eq!(session.input_text(), "");
        assert_eq!(session.state(), InputState::Idle);
        assert_eq!(session.active_index(), None);

        session.input("pain");
        assert_eq!(names(session.suggestions()), ["back pain", "throat pain"]);
    }

    #[test]
    fn tab_after_escape_commits_first_suggestion() {
        let mut session = session();
        session.input("fe");
        assert_eq!(session.key(IntakeKey::Escape), KeyResponse::Consumed);
        assert_eq!(session.state(), InputState::Idle);
        assert_eq!(session.input_text(), "fe");

        assert_eq!(session.key(IntakeKey::Tab), KeyResponse::Consumed);
        assert_eq!(session.selection().names(), &["fever"]);
    }

    #[test]
    fn failed_commit_keeps_input_and_raises_notice() {
        let mut session = session();
        session.input("sneezing");
        assert_eq!(session.key(IntakeKey::Enter), KeyResponse::PassThrough);
        assert_eq!(session.notice(), Some(IntakeNotice::NoMatch));
        assert_eq!(session.input_text(), "sneezing");
        assert!(session.selection().is_empty());

        session.input("");
        assert_eq!(session.notice(), None);
        assert_eq!(session.key(IntakeKey::Tab), KeyResponse::PassThrough);
        assert_eq!(session.notice(), Some(IntakeNotice::NeedsSelection));
    }

    #[test]
    fn typed_exact_match_commits_when_list_is_empty() {
        let catalog = Catalog::new(["Fever"]);
        let mut session = IntakeSession::new(
            catalog,
            TrackerConfig {
                suggestion_limit: 0,
                ..TrackerConfig::default()
            },
        );
        session.input("  FEVER ");
        assert!(session.suggestions().is_empty());
        assert_eq!(session.key(IntakeKey::Enter), KeyResponse::Consumed);
        assert_eq!(session.selection().names(), &["Fever"]);
    }

    #[test]
    fn backspace_on_empty_input_removes_last_selection() {
        let mut session = session();
        session.toggle("fever");
        session.toggle("headache");

        session.input("he");
        assert_eq!(session.key(IntakeKey::Backspace), KeyResponse::PassThrough);
        assert_eq!(session.selection().len(), 2);

        session.input("");
        assert_eq!(session.key(IntakeKey::Backspace), KeyResponse::Consumed);
        assert_eq!(session.selection().names(), &["fever"]);
    }

    #[test]
    fn blur_closes_only_when_not_superseded() {
        let mut session = session();
        session.input("pain");
        let ticket = session.blur();
        assert_eq!(ticket.delay, Duration::from_millis(150));

        session.focus();
        assert!(!session.expire_blur(ticket));
        assert!(session.is_open());

        let ticket = session.blur();
        assert!(session.expire_blur(ticket));
        assert_eq!(session.state(), InputState::Idle);
        assert_eq!(session.input_text(), "pain");
    }

    #[test]
    fn clicking_a_suggestion_commits_it() {
        let mut session = session();
        session.input("he");
        let ticket = session.blur();
        assert!(session.select_suggestion("headache"));
        assert!(session.expire_blur(ticket));
        assert_eq!(session.selection().names(), &["headache"]);
        assert_eq!(session.input_text(), "");
    }

    #[test]
    fn toggle_adds_and_removes_quick_options() {
        let mut session = session();
        assert!(session.toggle("Fever"));
        assert!(!session.toggle("fever"));
        assert!(session.selection().is_empty());
        assert!(!session.toggle("hiccups"));
        assert_eq!(session.notice(), Some(IntakeNotice::NoMatch));
    }

    #[test]
    fn finish_commits_pending_text_and_requires_a_selection() {
        let mut session = session();
        assert_eq!(session.finish(), Err(IntakeNotice::EmptySelection));

        session.input("runny");
        assert_eq!(session.finish(), Ok(vec!["runny nose".to_string()]));

        session.input("sneezing");
        assert_eq!(session.finish(), Err(IntakeNotice::NoMatch));

        session.reset();
        assert!(session.selection().is_empty());
        assert_eq!(session.input_text(), "");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(text in "\\PC{0,40}") {
            let once = normalize(&text);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn suggestions_respect_limit_and_exclusions(
            query in "[a-z ]{0,4}",
            excluded_count in 0usize..4,
        ) {
            let catalog = Catalog::builtin();
            let excluded: Vec<String> = catalog.names()[..excluded_count].to_vec();
            let ranked = suggest(&query, &catalog, &excluded, 8);
            prop_assert!(ranked.len() <= 8);
            for suggestion in &ranked {
                prop_assert!(!excluded.contains(&suggestion.name));
            }
            prop_assert!(ranked.windows(2).all(|pair| pair[0].sort_key <= pair[1].sort_key));
        }
    }
}
