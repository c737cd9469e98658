//! Condition resolution and recurrence counting over a newest-first history.

use crate::{non_empty, HistoryRecord, Outcome};

/// Condition shown when no alias field yields a name.
pub const FALLBACK_CONDITION: &str = "Analysis";

type ConditionResolver = fn(&Outcome) -> Option<&str>;

/// Tried in order; the first non-empty answer wins.
const CONDITION_RESOLVERS: &[ConditionResolver] = &[
    free_text,
    explicit_condition,
    top_condition,
    first_listed_condition,
];

fn free_text(outcome: &Outcome) -> Option<&str> {
    match outcome {
        Outcome::Text(text) => Some(text.trim()),
        Outcome::Report(_) => None,
    }
}

fn explicit_condition(outcome: &Outcome) -> Option<&str> {
    outcome.report()?.condition.as_deref()
}

fn top_condition(outcome: &Outcome) -> Option<&str> {
    outcome.report()?.top_condition.as_deref()
}

fn first_listed_condition(outcome: &Outcome) -> Option<&str> {
    outcome.report()?.conditions.first()?.name()
}

/// Display name of the condition an outcome points at.
pub fn resolve_condition(outcome: Option<&Outcome>) -> &str {
    let Some(outcome) = outcome else {
        return FALLBACK_CONDITION;
    };
    CONDITION_RESOLVERS
        .iter()
        .find_map(|resolver| non_empty(resolver(outcome)))
        .unwrap_or(FALLBACK_CONDITION)
}

/// Lowercase grouping key for an outcome's condition.
pub fn condition_key(outcome: Option<&Outcome>) -> String {
    resolve_condition(outcome).trim().to_lowercase()
}

/// Number of records older than `history[index]` sharing its condition key.
/// Out-of-range indices count nothing.
pub fn prior_occurrences_at(history: &[HistoryRecord], index: usize) -> usize {
    let Some(target) = history.get(index) else {
        return 0;
    };
    let key = condition_key(target.result.as_ref());
    history[index + 1..]
        .iter()
        .filter(|record| condition_key(record.result.as_ref()) == key)
        .count()
}

/// [`prior_occurrences_at`] for the first record whose id is `target_id`.
/// `None` when the history does not contain the target.
pub fn prior_occurrences(history: &[HistoryRecord], target_id: &str) -> Option<usize> {
    let index = position_of(history, target_id)?;
    Some(prior_occurrences_at(history, index))
}

pub(crate) fn position_of(history: &[HistoryRecord], target_id: &str) -> Option<usize> {
    history.iter().position(|record| record.id == target_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConditionRef, OutcomeReport};

    fn report(build: impl FnOnce(&mut OutcomeReport)) -> Outcome {
        let mut report = OutcomeReport::default();
        build(&mut report);
        Outcome::Report(report)
    }

    fn record(id: &str, condition: Option<&str>) -> HistoryRecord {
        HistoryRecord {
            id: id.to_string(),
            created_at: None,
            symptoms: Vec::new(),
            result: condition.map(|name| report(|r| r.condition = Some(name.to_string()))),
        }
    }

    #[test]
    fn resolvers_follow_alias_precedence() {
        let all = report(|r| {
            r.condition = Some("Flu".to_string());
            r.top_condition = Some("Cold".to_string());
            r.conditions = vec![ConditionRef::Name("Asthma".to_string())];
        });
        assert_eq!(resolve_condition(Some(&all)), "Flu");

        let blank_condition = report(|r| {
            r.condition = Some("  ".to_string());
            r.top_condition = Some("Cold".to_string());
        });
        assert_eq!(resolve_condition(Some(&blank_condition)), "Cold");

        let listed = report(|r| {
            r.conditions = vec![
                ConditionRef::Named {
                    name: Some("Sinusitis".to_string()),
                },
                ConditionRef::Name("Cold".to_string()),
            ]
        });
        assert_eq!(resolve_condition(Some(&listed)), "Sinusitis");

        let nameless = report(|r| r.conditions = vec![ConditionRef::Named { name: None }]);
        assert_eq!(resolve_condition(Some(&nameless)), FALLBACK_CONDITION);

        let text = Outcome::Text(" Migraine ".to_string());
        assert_eq!(resolve_condition(Some(&text)), "Migraine");
        assert_eq!(resolve_condition(None), FALLBACK_CONDITION);
        assert_eq!(condition_key(Some(&all)), "flu");
    }

    #[test]
    fn counts_only_strictly_older_matching_records() {
        let history = vec![
            record("a", Some("flu")),
            record("b", Some("cold")),
            record("c", Some("Flu")),
            record("d", Some("FLU")),
        ];
        assert_eq!(prior_occurrences(&history, "a"), Some(2));
        assert_eq!(prior_occurrences(&history, "c"), Some(1));
        assert_eq!(prior_occurrences(&history, "d"), Some(0));
        assert_eq!(prior_occurrences(&history, "b"), Some(0));
        assert_eq!(prior_occurrences(&history, "zz"), None);
        assert_eq!(prior_occurrences_at(&history, 9), 0);
    }

    #[test]
    fn missing_outcomes_group_under_the_fallback() {
        let history = vec![
            record("new", None),
            record("mid", Some("analysis")),
            record("old", None),
        ];
        assert_eq!(prior_occurrences(&history, "new"), Some(2));
    }
}
