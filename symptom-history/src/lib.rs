//! History provider JSON to core records, plus the dashboard report built on top.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use symptom_core::{
    advisory_for_at, care_tip, prior_occurrences_at, remedy_suggestions,
    resolve_condition, trend_for_at, AdvisoryContent, ConditionRef, HistoryRecord, Outcome,
    OutcomeReport, RemedySuggestion, SymptomEntry, TrackerConfig, TrackerError,
};
use tracing::debug;

/// Parse a history payload from a JSON string.
pub fn parse_history_str(history_json: &str) -> Result<Vec<HistoryRecord>, TrackerError> {
    let value: Value =
        serde_json::from_str(history_json).map_err(|err| TrackerError::Parse(err.to_string()))?;
    parse_history_value(&value)
}

/// Parse a history payload: an array of records, or an object wrapping one
/// under `items`, `history` or `data`. Records without an id are skipped.
pub fn parse_history_value(payload: &Value) -> Result<Vec<HistoryRecord>, TrackerError> {
    let entries = match payload {
        Value::Array(entries) => entries,
        Value::Object(obj) => ["items", "history", "data"]
            .iter()
            .find_map(|field| obj.get(*field).and_then(Value::as_array))
            .ok_or(TrackerError::MissingData)?,
        other => {
            return Err(TrackerError::Parse(format!(
                "Expected an array of history records, received {}",
                value_kind(other)
            )))
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    for (position, entry) in entries.iter().enumerate() {
        let Some(obj) = entry.as_object() else {
            debug!(position, "skipping history entry that is not an object");
            continue;
        };
        let Some(id) = extract_id(obj) else {
            debug!(position, "skipping history entry without id");
            continue;
        };
        records.push(HistoryRecord {
            id,
            created_at: extract_datetime(obj, &["created_at", "createdAt"]),
            symptoms: obj.get("symptoms").map(parse_symptoms).unwrap_or_default(),
            result: obj.get("result").and_then(parse_outcome),
        });
    }
    Ok(records)
}

/// Sort newest first. Records sharing an instant keep their supplied order;
/// records without a timestamp go last, also in supplied order.
pub fn order_newest_first(mut records: Vec<HistoryRecord>) -> Vec<HistoryRecord> {
    records.sort_by(|a, b| match (a.created_at, b.created_at) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    records
}

/// Symptom names from a catalog provider response: `{"symptoms": [..]}` or
/// a bare array. Non-string entries are ignored.
pub fn parse_catalog_payload(catalog_json: &str) -> Result<Vec<String>, TrackerError> {
    let value: Value =
        serde_json::from_str(catalog_json).map_err(|err| TrackerError::Parse(err.to_string()))?;
    let list = match &value {
        Value::Array(list) => list,
        Value::Object(obj) => obj
            .get("symptoms")
            .and_then(Value::as_array)
            .ok_or(TrackerError::MissingData)?,
        other => {
            return Err(TrackerError::Parse(format!(
                "Expected a symptom list, received {}",
                value_kind(other)
            )))
        }
    };
    Ok(list
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect())
}

/// Everything the dashboard shows for one record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryInsight {
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub symptoms: Vec<String>,
    pub condition: Option<String>,
    pub severity: Option<String>,
    pub prior_occurrences: usize,
    pub advisory: Option<String>,
    pub trend: String,
    pub remedies: Vec<RemedySuggestion>,
    pub details: Option<String>,
    pub treatment: Option<String>,
    pub advice: Option<String>,
    pub care_tip: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryReport {
    pub generated_at: DateTime<Utc>,
    pub total_checks: usize,
    pub last_condition: Option<String>,
    pub last_checked_at: Option<DateTime<Utc>>,
    pub entries: Vec<HistoryInsight>,
}

/// Build the report for a newest-first history. Only the newest
/// `config.history_limit` records are considered.
pub fn summarize_history(
    history: &[HistoryRecord],
    content: &dyn AdvisoryContent,
    config: &TrackerConfig,
) -> HistoryReport {
    let history = &history[..history.len().min(config.history_limit)];

    let entries = history
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let outcome = record.result.as_ref();
            HistoryInsight {
                id: record.id.clone(),
                created_at: record.created_at,
                symptoms: record.symptom_labels(),
                condition: outcome.map(|outcome| resolve_condition(Some(outcome)).to_string()),
                severity: outcome.and_then(Outcome::severity).map(str::to_string),
                prior_occurrences: prior_occurrences_at(history, index),
                advisory: advisory_for_at(history, index, content),
                trend: trend_for_at(history, index),
                remedies: remedy_suggestions(&record.symptoms, config.remedy_limit),
                details: outcome.and_then(Outcome::details).map(str::to_string),
                treatment: outcome.and_then(Outcome::treatment).map(str::to_string),
                advice: outcome.and_then(Outcome::advice).map(str::to_string),
                care_tip: outcome.map(|outcome| care_tip(outcome.severity()).to_string()),
            }
        })
        .collect();

    let last = history.first();
    HistoryReport {
        generated_at: Utc::now(),
        total_checks: history.len(),
        last_condition: last.map(|record| resolve_condition(record.result.as_ref()).to_string()),
        last_checked_at: last.and_then(|record| record.created_at),
        entries,
    }
}

/// Parse, order and summarize a history payload in one step.
pub fn summarize_history_str(
    history_json: &str,
    content: &dyn AdvisoryContent,
    config: &TrackerConfig,
) -> Result<HistoryReport, TrackerError> {
    let records = order_newest_first(parse_history_str(history_json)?);
    Ok(summarize_history(&records, content, config))
}

fn extract_id(obj: &Map<String, Value>) -> Option<String> {
    match obj.get("id")? {
        Value::String(id) if !id.trim().is_empty() => Some(id.trim().to_string()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

fn extract_datetime(obj: &Map<String, Value>, fields: &[&str]) -> Option<DateTime<Utc>> {
    fields
        .iter()
        .filter_map(|field| obj.get(*field).and_then(Value::as_str))
        .find_map(parse_datetime)
}

fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

fn parse_symptoms(value: &Value) -> Vec<SymptomEntry> {
    match value {
        Value::Array(items) => items.iter().filter_map(parse_symptom).collect(),
        Value::Null => Vec::new(),
        Value::Object(obj) if !obj.contains_key("name") && !obj.contains_key("code") => {
            obj.values().filter_map(parse_symptom).collect()
        }
        single => parse_symptom(single).into_iter().collect(),
    }
}

fn parse_symptom(value: &Value) -> Option<SymptomEntry> {
    match value {
        Value::String(name) => Some(SymptomEntry::Name(name.clone())),
        Value::Object(obj) => Some(SymptomEntry::Coded {
            name: extract_text(obj, &["name"]),
            code: extract_text(obj, &["code"]),
        }),
        Value::Number(number) => Some(SymptomEntry::Name(number.to_string())),
        _ => None,
    }
}

fn parse_outcome(value: &Value) -> Option<Outcome> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(Outcome::Text(text.clone())),
        Value::Object(obj) => Some(Outcome::Report(parse_report(obj))),
        _ => None,
    }
}

fn parse_report(obj: &Map<String, Value>) -> OutcomeReport {
    OutcomeReport {
        severity: extract_text(obj, &["severity"]),
        condition: extract_text(obj, &["condition"]),
        top_condition: extract_text(obj, &["topCondition", "top_condition"]),
        conditions: obj
            .get("conditions")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(parse_condition_ref).collect())
            .unwrap_or_default(),
        details: extract_text(obj, &["details"]),
        description: extract_text(obj, &["description"]),
        condition_details: extract_text(obj, &["conditionDetails", "condition_details"]),
        treatment: extract_text(obj, &["treatment"]),
        treatment_option: extract_text(obj, &["treatmentOption", "treatment_option"]),
        recommendation: extract_text(obj, &["recommendation"]),
        advice: extract_text(obj, &["advice"]),
        general_advice: extract_text(obj, &["generalAdvice", "general_advice"]),
        next_steps: extract_text(obj, &["nextSteps", "next_steps"]),
        remedy: extract_text(obj, &["remedy"]),
        insights: extract_text_list(obj.get("insights")),
        accuracy_level: extract_text(obj, &["accuracyLevel", "accuracy_level"]),
        red_flags: extract_text_list(obj.get("redFlags").or_else(|| obj.get("red_flags"))),
    }
}

/// Entries without a usable name stay in place as nameless refs.
fn parse_condition_ref(value: &Value) -> ConditionRef {
    match value {
        Value::String(name) => ConditionRef::Name(name.clone()),
        Value::Object(obj) => ConditionRef::Named {
            name: extract_text(obj, &["name"]),
        },
        _ => ConditionRef::Named { name: None },
    }
}

/// First field that holds a non-blank string or a number.
fn extract_text(obj: &Map<String, Value>, fields: &[&str]) -> Option<String> {
    for field in fields {
        match obj.get(*field) {
            Some(Value::String(text)) if !text.trim().is_empty() => return Some(text.clone()),
            Some(Value::Number(number)) => return Some(number.to_string()),
            _ => {}
        }
    }
    None
}

fn extract_text_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .filter(|text| !text.trim().is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::String(text)) if !text.trim().is_empty() => vec![text.clone()],
        _ => Vec::new(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
