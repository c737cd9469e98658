//! Severity and condition trend between consecutive assessments.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::recurrence::{condition_key, position_of, resolve_condition};
use crate::{HistoryRecord, Outcome};

pub const NO_PRIOR_DATA: &str = "Initial assessment; no prior data.";
pub const INSUFFICIENT_DATA: &str = "Insufficient data from prior assessment.";

/// Severity vocabulary, ordered from least to most severe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Mild,
    Moderate,
    High,
    Severe,
    Critical,
}

impl Severity {
    /// Case-insensitive lookup; anything unrecognised ranks as moderate.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|text| text.trim().to_lowercase()).as_deref() {
            Some("low") => Severity::Low,
            Some("mild") => Severity::Mild,
            Some("moderate") => Severity::Moderate,
            Some("high") => Severity::High,
            Some("severe") => Severity::Severe,
            Some("critical") => Severity::Critical,
            _ => Severity::Moderate,
        }
    }

    pub fn rank(self) -> usize {
        self as usize
    }
}

fn severity_of(outcome: &Outcome) -> Severity {
    Severity::from_label(outcome.severity())
}

/// Trend sentence for `history[index]` against the record right after it,
/// which is its chronological predecessor.
pub fn trend_for_at(history: &[HistoryRecord], index: usize) -> String {
    let (Some(current), Some(previous)) = (history.get(index), history.get(index + 1)) else {
        return NO_PRIOR_DATA.to_string();
    };
    let (Some(current), Some(previous)) = (current.result.as_ref(), previous.result.as_ref())
    else {
        return INSUFFICIENT_DATA.to_string();
    };

    let trend = match severity_of(current).cmp(&severity_of(previous)) {
        Ordering::Equal => "severity appears stable",
        Ordering::Greater => "severity trending up",
        Ordering::Less => "severity trending down",
    };

    let current_condition = resolve_condition(Some(current));
    let previous_condition = resolve_condition(Some(previous));
    let condition_note = if condition_key(Some(current)) == condition_key(Some(previous)) {
        format!("condition persists ({current_condition})")
    } else {
        format!("shift from {previous_condition} to {current_condition}")
    };

    format!("{condition_note}; {trend}.")
}

/// [`trend_for_at`] for the record with id `target_id`; `None` when absent.
pub fn trend_for(history: &[HistoryRecord], target_id: &str) -> Option<String> {
    let index = position_of(history, target_id)?;
    Some(trend_for_at(history, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutcomeReport;

    fn record(id: &str, severity: &str, condition: &str) -> HistoryRecord {
        HistoryRecord {
            id: id.to_string(),
            created_at: None,
            symptoms: Vec::new(),
            result: Some(Outcome::Report(OutcomeReport {
                severity: Some(severity.to_string()),
                top_condition: Some(condition.to_string()),
                ..OutcomeReport::default()
            })),
        }
    }

    #[test]
    fn severity_labels_rank_in_order() {
        assert!(Severity::from_label(Some("LOW")) < Severity::from_label(Some("mild")));
        assert_eq!(Severity::from_label(Some("urgent")), Severity::Moderate);
        assert_eq!(Severity::from_label(None).rank(), 2);
        assert_eq!(Severity::Critical.rank(), 5);
    }

    #[test]
    fn stable_severity_with_persisting_condition() {
        let history = vec![record("b", "High", "Flu"), record("a", "high", "flu")];
        assert_eq!(
            trend_for(&history, "b").as_deref(),
            Some("condition persists (Flu); severity appears stable.")
        );
    }

    #[test]
    fn rising_and_falling_severity() {
        let history = vec![
            record("c", "mild", "Cold"),
            record("b", "severe", "Flu"),
            record("a", "low", "Flu"),
        ];
        assert_eq!(
            trend_for(&history, "b").as_deref(),
            Some("condition persists (Flu); severity trending up.")
        );
        assert_eq!(
            trend_for(&history, "c").as_deref(),
            Some("shift from Flu to Cold; severity trending down.")
        );
        assert_eq!(trend_for(&history, "a").as_deref(), Some(NO_PRIOR_DATA));
        assert_eq!(trend_for(&history, "zz"), None);
    }

    #[test]
    fn missing_outcome_is_insufficient_data() {
        let mut history = vec![record("b", "high", "Flu"), record("a", "low", "Flu")];
        history[1].result = None;
        assert_eq!(trend_for_at(&history, 0), INSUFFICIENT_DATA);
    }

    #[test]
    fn unknown_severity_counts_as_moderate() {
        let history = vec![record("b", "whatever", "Flu"), record("a", "moderate", "Flu")];
        assert!(trend_for_at(&history, 0).ends_with("severity appears stable."));
    }
}
