//! Recurrence-tiered prevention guidance.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::content::{PREVENTION_TIPS, TIERED_PREVENTION};
use crate::recurrence::{condition_key, position_of, prior_occurrences_at};
use crate::{non_empty, HistoryRecord, TrackerError};

/// Sentence used when no content exists for a condition and tier.
pub const GENERIC_PREVENTION: &str = "Maintain healthy sleep, nutrition, hydration, hygiene, and early management of new symptoms to reduce recurrence.";

const CONSULT_NOTICE: &str = "⚕️ IMPORTANT: Schedule medical consultation immediately to identify and address underlying causes. This pattern requires professional evaluation and personalized treatment plan.";

const CRITICAL_CONSULT_NOTICE: &str = "⚕️ CRITICAL: This recurring pattern indicates a chronic condition requiring immediate professional diagnosis and comprehensive treatment. Do not delay medical consultation.";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryTier {
    First,
    Second,
    Third,
}

impl AdvisoryTier {
    pub fn for_prior_occurrences(prior: usize) -> Self {
        match prior {
            0 => AdvisoryTier::First,
            1 => AdvisoryTier::Second,
            _ => AdvisoryTier::Third,
        }
    }
}

/// Guidance text per tier for one condition. Any tier may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TieredAdvice {
    pub first: Option<String>,
    pub second: Option<String>,
    pub third: Option<String>,
}

impl TieredAdvice {
    pub fn tier(&self, tier: AdvisoryTier) -> Option<&str> {
        let text = match tier {
            AdvisoryTier::First => self.first.as_deref(),
            AdvisoryTier::Second => self.second.as_deref(),
            AdvisoryTier::Third => self.third.as_deref(),
        };
        non_empty(text)
    }
}

/// Source of guidance text, keyed by lowercase condition.
pub trait AdvisoryContent {
    /// Detailed text for one tier of a condition.
    fn tiered(&self, condition_key: &str, tier: AdvisoryTier) -> Option<&str>;

    /// Coarse single tip, consulted for first occurrences only.
    fn prevention_tip(&self, condition_key: &str) -> Option<&str>;

    fn generic(&self) -> &str {
        GENERIC_PREVENTION
    }

    /// Walk the fallback chain for `tier`.
    fn resolve(&self, condition_key: &str, tier: AdvisoryTier) -> &str {
        self.tiered(condition_key, tier)
            .or_else(|| match tier {
                AdvisoryTier::First => self.prevention_tip(condition_key),
                AdvisoryTier::Second | AdvisoryTier::Third => None,
            })
            .unwrap_or_else(|| self.generic())
    }
}

/// In-memory guidance tables. [`AdvisoryLibrary::builtin`] ships the default
/// English content; [`AdvisoryLibrary::from_json_str`] loads a replacement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdvisoryLibrary {
    #[serde(default)]
    tiered: HashMap<String, TieredAdvice>,
    #[serde(default)]
    tips: HashMap<String, String>,
    #[serde(default = "default_generic")]
    generic: String,
}

fn default_generic() -> String {
    GENERIC_PREVENTION.to_string()
}

impl AdvisoryLibrary {
    pub fn new(
        tiered: HashMap<String, TieredAdvice>,
        tips: HashMap<String, String>,
        generic: impl Into<String>,
    ) -> Self {
        Self {
            tiered: lowercase_keys(tiered),
            tips: lowercase_keys(tips),
            generic: generic.into(),
        }
    }

    pub fn builtin() -> Self {
        let tiered = TIERED_PREVENTION
            .iter()
            .map(|entry| {
                let advice = TieredAdvice {
                    first: entry.first.map(str::to_string),
                    second: entry.second.map(str::to_string),
                    third: entry.third.map(str::to_string),
                };
                (entry.key.to_string(), advice)
            })
            .collect();
        let tips = PREVENTION_TIPS
            .iter()
            .map(|(key, tip)| (key.to_string(), tip.to_string()))
            .collect();
        Self::new(tiered, tips, GENERIC_PREVENTION)
    }

    /// Parse `{ "tiered": {..}, "tips": {..}, "generic": ".." }`; every
    /// section is optional.
    pub fn from_json_str(json: &str) -> Result<Self, TrackerError> {
        let parsed: AdvisoryLibrary =
            serde_json::from_str(json).map_err(|err| TrackerError::Parse(err.to_string()))?;
        Ok(Self::new(parsed.tiered, parsed.tips, parsed.generic))
    }
}

impl Default for AdvisoryLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AdvisoryContent for AdvisoryLibrary {
    fn tiered(&self, condition_key: &str, tier: AdvisoryTier) -> Option<&str> {
        self.tiered.get(condition_key)?.tier(tier)
    }

    fn prevention_tip(&self, condition_key: &str) -> Option<&str> {
        non_empty(self.tips.get(condition_key).map(String::as_str))
    }

    fn generic(&self) -> &str {
        &self.generic
    }
}

fn lowercase_keys<V>(map: HashMap<String, V>) -> HashMap<String, V> {
    map.into_iter()
        .map(|(key, value)| (key.trim().to_lowercase(), value))
        .collect()
}

/// Framed guidance for a condition seen `prior` times before.
pub fn advisory_for(condition_key: &str, prior: usize, content: &dyn AdvisoryContent) -> String {
    let condition = condition_key.trim().to_lowercase();
    let tier = AdvisoryTier::for_prior_occurrences(prior);
    let tip = content.resolve(&condition, tier);

    match (tier, prior) {
        (AdvisoryTier::First, _) => {
            format!("First recorded {condition}; focus on prevention: {tip}")
        }
        (AdvisoryTier::Second, _) => {
            format!("⚠️ 2nd occurrence of {condition}. Escalated Prevention Plan:\n\n{tip}")
        }
        (AdvisoryTier::Third, 2) => format!(
            "🚨 3rd occurrence of {condition}. Intensive Prevention Required:\n\n{tip}\n\n{CONSULT_NOTICE}"
        ),
        (AdvisoryTier::Third, _) => format!(
            "🆘 Frequent {condition} (occurrence {}). URGENT MEDICAL ATTENTION NEEDED:\n\n{tip}\n\n{CRITICAL_CONSULT_NOTICE}",
            prior + 1
        ),
    }
}

/// Guidance for the record `target_id` within a newest-first history.
/// `None` when the record is missing or carries no outcome.
pub fn advisory_for_record(
    history: &[HistoryRecord],
    target_id: &str,
    content: &dyn AdvisoryContent,
) -> Option<String> {
    advisory_for_at(history, position_of(history, target_id)?, content)
}

/// Advisory for `history[index]`. `None` when the index is out of range or
/// the record has no outcome.
pub fn advisory_for_at(
    history: &[HistoryRecord],
    index: usize,
    content: &dyn AdvisoryContent,
) -> Option<String> {
    let outcome = history.get(index)?.result.as_ref()?;
    let prior = prior_occurrences_at(history, index);
    Some(advisory_for(&condition_key(Some(outcome)), prior, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outcome, OutcomeReport};

    fn sparse_library() -> AdvisoryLibrary {
        let mut tiered = HashMap::new();
        tiered.insert(
            "Migraine".to_string(),
            TieredAdvice {
                first: None,
                second: Some("Keep a trigger diary.".to_string()),
                third: None,
            },
        );
        tiered.insert(
            "flu".to_string(),
            TieredAdvice {
                first: Some("Get vaccinated.".to_string()),
                ..TieredAdvice::default()
            },
        );
        let mut tips = HashMap::new();
        tips.insert("migraine".to_string(), "Sleep regularly.".to_string());
        AdvisoryLibrary::new(tiered, tips, "Look after yourself.")
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(AdvisoryTier::for_prior_occurrences(0), AdvisoryTier::First);
        assert_eq!(AdvisoryTier::for_prior_occurrences(1), AdvisoryTier::Second);
        assert_eq!(AdvisoryTier::for_prior_occurrences(2), AdvisoryTier::Third);
        assert_eq!(AdvisoryTier::for_prior_occurrences(7), AdvisoryTier::Third);
    }

    #[test]
    fn content_falls_back_through_the_chain() {
        let library = sparse_library();
        assert_eq!(library.resolve("flu", AdvisoryTier::First), "Get vaccinated.");
        assert_eq!(library.resolve("migraine", AdvisoryTier::First), "Sleep regularly.");
        assert_eq!(
            library.resolve("migraine", AdvisoryTier::Second),
            "Keep a trigger diary."
        );
        assert_eq!(library.resolve("migraine", AdvisoryTier::Third), "Look after yourself.");
        assert_eq!(library.resolve("flu", AdvisoryTier::Second), "Look after yourself.");
        assert_eq!(library.resolve("gout", AdvisoryTier::First), "Look after yourself.");
    }

    #[test]
    fn framing_escalates_with_occurrences() {
        let library = sparse_library();

        assert_eq!(
            advisory_for("Flu", 0, &library),
            "First recorded flu; focus on prevention: Get vaccinated."
        );
        assert_eq!(
            advisory_for("migraine", 1, &library),
            "⚠️ 2nd occurrence of migraine. Escalated Prevention Plan:\n\nKeep a trigger diary."
        );

        let third = advisory_for("migraine", 2, &library);
        assert!(third.starts_with("🚨 3rd occurrence of migraine. Intensive Prevention Required:"));
        assert!(third.contains("Look after yourself."));
        assert!(third.ends_with(CONSULT_NOTICE));

        let frequent = advisory_for("migraine", 4, &library);
        assert!(frequent.starts_with("🆘 Frequent migraine (occurrence 5). URGENT MEDICAL ATTENTION NEEDED:"));
        assert!(frequent.ends_with(CRITICAL_CONSULT_NOTICE));
    }

    #[test]
    fn builtin_library_covers_known_conditions() {
        let library = AdvisoryLibrary::builtin();
        assert!(library
            .resolve("influenza", AdvisoryTier::Third)
            .starts_with("Intensive flu protection"));
        assert_eq!(library.resolve("unknown thing", AdvisoryTier::First), GENERIC_PREVENTION);
    }

    #[test]
    fn library_loads_from_json() {
        let library = AdvisoryLibrary::from_json_str(
            r#"{"tiered":{"Gout":{"second":"Cut back on purines."}},"tips":{"gout":"Hydrate."}}"#,
        )
        .unwrap();
        assert_eq!(library.resolve("gout", AdvisoryTier::First), "Hydrate.");
        assert_eq!(library.resolve("gout", AdvisoryTier::Second), "Cut back on purines.");
        assert_eq!(library.generic(), GENERIC_PREVENTION);

        assert!(matches!(
            AdvisoryLibrary::from_json_str("[1, 2]"),
            Err(TrackerError::Parse(_))
        ));
    }

    #[test]
    fn record_advisory_needs_an_outcome() {
        let outcome = |condition: &str| {
            Some(Outcome::Report(OutcomeReport {
                condition: Some(condition.to_string()),
                ..OutcomeReport::default()
            }))
        };
        let history = vec![
            HistoryRecord {
                id: "new".to_string(),
                created_at: None,
                symptoms: Vec::new(),
                result: outcome("Flu"),
            },
            HistoryRecord {
                id: "blank".to_string(),
                created_at: None,
                symptoms: Vec::new(),
                result: None,
            },
            HistoryRecord {
                id: "old".to_string(),
                created_at: None,
                symptoms: Vec::new(),
                result: outcome("flu"),
            },
        ];
        let library = sparse_library();

        let text = advisory_for_record(&history, "new", &library).unwrap();
        assert!(text.starts_with("⚠️ 2nd occurrence of flu."));
        assert_eq!(advisory_for_record(&history, "blank", &library), None);
        assert_eq!(advisory_for_record(&history, "missing", &library), None);
    }

    #[test]
    fn advisory_by_position_follows_each_duplicate() {
        let history = vec![
            HistoryRecord {
                id: "x".to_string(),
                created_at: None,
                symptoms: Vec::new(),
                result: Some(Outcome::Text("Flu".to_string())),
            },
            HistoryRecord {
                id: "x".to_string(),
                created_at: None,
                symptoms: Vec::new(),
                result: None,
            },
        ];
        let library = sparse_library();

        assert!(advisory_for_at(&history, 0, &library).is_some());
        assert_eq!(advisory_for_at(&history, 1, &library), None);
        assert_eq!(advisory_for_at(&history, 2, &library), None);
    }
}
