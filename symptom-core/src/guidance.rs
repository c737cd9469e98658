//! Short care texts shown next to an analysis result.

use serde::{Deserialize, Serialize};

use crate::content::SYMPTOM_REMEDIES;
use crate::suggest::normalize;
use crate::SymptomEntry;

pub const GENERIC_REMEDY: &str =
    "Rest, hydrate, and monitor symptoms. Consult a clinician if they worsen.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemedySuggestion {
    pub label: String,
    pub remedy: String,
}

/// Home-care tips for the first `limit` symptoms of a record.
pub fn remedy_suggestions(symptoms: &[SymptomEntry], limit: usize) -> Vec<RemedySuggestion> {
    symptoms
        .iter()
        .take(limit)
        .map(|entry| {
            let label = entry.label();
            let key = normalize(label);
            let remedy = SYMPTOM_REMEDIES
                .iter()
                .find(|(symptom, _)| *symptom == key)
                .map(|(_, remedy)| *remedy)
                .unwrap_or(GENERIC_REMEDY);
            RemedySuggestion {
                label: label.to_string(),
                remedy: remedy.to_string(),
            }
        })
        .collect()
}

/// Immediate care advice for an analyzer severity label.
pub fn care_tip(severity: Option<&str>) -> &'static str {
    match severity.map(|text| text.trim().to_lowercase()).as_deref() {
        Some("high") => {
            "If symptoms are severe or worsening, call emergency services immediately."
        }
        Some("medium") => {
            "Rest, hydrate, consider OTC relief, and consult a clinician if symptoms persist."
        }
        _ => "Maintain hydration, rest, and reassess if new symptoms appear.",
    }
}

/// How much to trust a result, given the analyzer's accuracy level.
pub fn confidence_message(accuracy_level: Option<&str>) -> Option<&'static str> {
    let message = match accuracy_level?.trim() {
        "" => return None,
        "High" => "Strong match found in our training set.",
        "Moderate" => "Symptoms align with the condition, but consider medical confirmation.",
        _ => "Symptoms are broad; treat this result as a starting point.",
    };
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remedies_cover_first_symptoms_only() {
        let symptoms = vec![
            SymptomEntry::Name("Headache".to_string()),
            SymptomEntry::Coded {
                name: None,
                code: Some("R05".to_string()),
            },
            SymptomEntry::Name("cough".to_string()),
            SymptomEntry::Name("fever".to_string()),
        ];
        let remedies = remedy_suggestions(&symptoms, 3);
        assert_eq!(remedies.len(), 3);
        assert_eq!(remedies[0].label, "Headache");
        assert!(remedies[0].remedy.starts_with("Rest in a quiet, dark room"));
        assert_eq!(remedies[1].remedy, GENERIC_REMEDY);
        assert!(remedies[2].remedy.starts_with("Sip warm fluids"));
    }

    #[test]
    fn care_tips_by_severity() {
        assert!(care_tip(Some("High")).contains("emergency services"));
        assert!(care_tip(Some("medium")).starts_with("Rest, hydrate"));
        assert!(care_tip(None).starts_with("Maintain hydration"));
    }

    #[test]
    fn confidence_messages() {
        assert_eq!(confidence_message(None), None);
        assert_eq!(
            confidence_message(Some("High")),
            Some("Strong match found in our training set.")
        );
        assert!(confidence_message(Some("Low")).is_some_and(|m| m.contains("starting point")));
    }
}
