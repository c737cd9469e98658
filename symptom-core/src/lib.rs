//! Core logic for symptom intake and assessment history analysis.
//!
//! Everything in this crate is pure: the catalog, the history snapshot and the
//! session state are passed in by the caller, and nothing here performs I/O.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod advisory;
pub mod catalog;
mod content;
pub mod details;
pub mod guidance;
pub mod recurrence;
pub mod selection;
pub mod suggest;
pub mod trend;

pub use advisory::{
    advisory_for, advisory_for_at, advisory_for_record, AdvisoryContent, AdvisoryLibrary,
    AdvisoryTier, TieredAdvice,
};
pub use catalog::Catalog;
pub use details::{AnalysisRequest, Gender, HealthDetails};
pub use guidance::{care_tip, confidence_message, remedy_suggestions, RemedySuggestion};
pub use recurrence::{
    condition_key, prior_occurrences, prior_occurrences_at, resolve_condition, FALLBACK_CONDITION,
};
pub use selection::{AddOutcome, SelectionSet};
pub use suggest::{
    normalize, suggest, BlurTicket, InputState, IntakeKey, IntakeNotice, IntakeSession,
    IntakeView, KeyResponse, Suggestion,
};
pub use trend::{trend_for, trend_for_at, Severity};

/// Tunable limits shared by the intake session and the history report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrackerConfig {
    /// Maximum number of suggestions shown for one query.
    pub suggestion_limit: usize,
    /// Grace period before a blurred input closes its suggestion list.
    pub blur_close_delay_ms: u64,
    /// Number of newest history records considered for a report.
    pub history_limit: usize,
    /// Number of symptoms that get a remedy tip per record.
    pub remedy_limit: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: 8,
            blur_close_delay_ms: 150,
            history_limit: 50,
            remedy_limit: 3,
        }
    }
}

/// One past assessment as supplied by the history provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryRecord {
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub symptoms: Vec<SymptomEntry>,
    pub result: Option<Outcome>,
}

impl HistoryRecord {
    /// Display labels of the recorded symptoms, in stored order.
    pub fn symptom_labels(&self) -> Vec<String> {
        self.symptoms
            .iter()
            .map(|entry| entry.label().to_string())
            .collect()
    }
}

/// A symptom as stored in a record: a bare name or a name/code object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SymptomEntry {
    Name(String),
    Coded {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        code: Option<String>,
    },
}

impl SymptomEntry {
    pub fn label(&self) -> &str {
        match self {
            SymptomEntry::Name(name) => name,
            SymptomEntry::Coded { name, code } => non_empty(name.as_deref())
                .or_else(|| non_empty(code.as_deref()))
                .unwrap_or("symptom"),
        }
    }
}

/// Analysis result attached to a record: free text or a structured report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Outcome {
    Text(String),
    Report(OutcomeReport),
}

impl Outcome {
    pub fn report(&self) -> Option<&OutcomeReport> {
        match self {
            Outcome::Report(report) => Some(report),
            Outcome::Text(_) => None,
        }
    }

    pub fn severity(&self) -> Option<&str> {
        self.report().and_then(|report| report.severity.as_deref())
    }

    /// First non-empty of `details`, `description`, `conditionDetails`.
    pub fn details(&self) -> Option<&str> {
        let report = self.report()?;
        first_non_empty(&[
            report.details.as_deref(),
            report.description.as_deref(),
            report.condition_details.as_deref(),
        ])
    }

    /// First non-empty of `treatment`, `treatmentOption`, `recommendation`.
    pub fn treatment(&self) -> Option<&str> {
        let report = self.report()?;
        first_non_empty(&[
            report.treatment.as_deref(),
            report.treatment_option.as_deref(),
            report.recommendation.as_deref(),
        ])
    }

    /// First non-empty of `advice`, `generalAdvice`, `nextSteps`.
    pub fn advice(&self) -> Option<&str> {
        let report = self.report()?;
        first_non_empty(&[
            report.advice.as_deref(),
            report.general_advice.as_deref(),
            report.next_steps.as_deref(),
        ])
    }
}

/// Structured analyzer output. Several fields are aliases of one another and
/// are resolved by precedence, never merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OutcomeReport {
    pub severity: Option<String>,
    pub condition: Option<String>,
    pub top_condition: Option<String>,
    pub conditions: Vec<ConditionRef>,
    pub details: Option<String>,
    pub description: Option<String>,
    pub condition_details: Option<String>,
    pub treatment: Option<String>,
    pub treatment_option: Option<String>,
    pub recommendation: Option<String>,
    pub advice: Option<String>,
    pub general_advice: Option<String>,
    pub next_steps: Option<String>,
    pub remedy: Option<String>,
    pub insights: Vec<String>,
    pub accuracy_level: Option<String>,
    pub red_flags: Vec<String>,
}

/// Entry of a `conditions` list: a bare name or an object exposing one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ConditionRef {
    Name(String),
    Named {
        #[serde(default)]
        name: Option<String>,
    },
}

impl ConditionRef {
    pub fn name(&self) -> Option<&str> {
        match self {
            ConditionRef::Name(name) => Some(name),
            ConditionRef::Named { name } => name.as_deref(),
        }
    }
}

/// Errors raised at the parsing boundary. Analysis itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("input is missing the minimum required data")]
    MissingData,
    #[error("could not parse input: {0}")]
    Parse(String),
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

fn first_non_empty<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates.iter().copied().find_map(non_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_deserializes_text_and_report() {
        let text: Outcome = serde_json::from_str(r#""Migraine""#).unwrap();
        assert_eq!(text, Outcome::Text("Migraine".to_string()));

        let report: Outcome = serde_json::from_str(
            r#"{"severity":"High","topCondition":"Influenza","conditions":["flu",{"name":"cold"}],"nextSteps":"Rest"}"#,
        )
        .unwrap();
        let inner = report.report().unwrap();
        assert_eq!(inner.top_condition.as_deref(), Some("Influenza"));
        assert_eq!(inner.conditions[1].name(), Some("cold"));
        assert_eq!(report.advice(), Some("Rest"));
        assert_eq!(report.severity(), Some("High"));
    }

    #[test]
    fn alias_accessors_skip_blank_fields() {
        let outcome = Outcome::Report(OutcomeReport {
            details: Some("  ".to_string()),
            condition_details: Some("Viral infection".to_string()),
            treatment_option: Some("Fluids".to_string()),
            ..OutcomeReport::default()
        });
        assert_eq!(outcome.details(), Some("Viral infection"));
        assert_eq!(outcome.treatment(), Some("Fluids"));
        assert_eq!(outcome.advice(), None);
        assert_eq!(Outcome::Text("Flu".to_string()).details(), None);
    }

    #[test]
    fn symptom_entry_label_prefers_name_then_code() {
        let coded = SymptomEntry::Coded {
            name: None,
            code: Some("R51".to_string()),
        };
        assert_eq!(coded.label(), "R51");
        let empty = SymptomEntry::Coded {
            name: Some(String::new()),
            code: None,
        };
        assert_eq!(empty.label(), "symptom");
        assert_eq!(SymptomEntry::Name("cough".to_string()).label(), "cough");
    }
}
