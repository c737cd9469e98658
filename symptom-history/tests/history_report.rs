use std::fs;

use serde_json::Value;
use symptom_core::{AdvisoryLibrary, TrackerConfig};
use symptom_history::summarize_history_str;

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn history_report_matches_golden() {
    let history = fs::read_to_string(fixture_path("history.json")).expect("history fixture");
    let advisory = fs::read_to_string(fixture_path("advisory.json")).expect("advisory fixture");
    let library = AdvisoryLibrary::from_json_str(&advisory).expect("advisory library");

    let config = TrackerConfig {
        remedy_limit: 1,
        ..TrackerConfig::default()
    };
    let report = summarize_history_str(&history, &library, &config).expect("history report");

    let mut actual = serde_json::to_value(report).expect("serialize report");
    normalize_dynamic_fields(&mut actual);

    let expected = fs::read_to_string(fixture_path("history_report.json")).expect("golden report");
    let mut expected_value: Value = serde_json::from_str(&expected).expect("golden is valid JSON");
    normalize_dynamic_fields(&mut expected_value);

    assert_eq!(actual, expected_value);
}

#[test]
fn builtin_content_escalates_for_repeated_conditions() {
    let history = fs::read_to_string(fixture_path("history.json")).expect("history fixture");
    let report =
        summarize_history_str(&history, &AdvisoryLibrary::builtin(), &TrackerConfig::default())
            .expect("history report");

    let newest = &report.entries[0];
    let advisory = newest.advisory.as_deref().expect("advisory for newest record");
    assert!(advisory.contains("Intensive flu protection"));
    assert!(advisory.contains("Schedule medical consultation immediately"));

    let oldest_with_result = &report.entries[2];
    assert_eq!(
        oldest_with_result.advisory.as_deref(),
        Some("First recorded influenza; focus on prevention: Get annual flu vaccine, wash hands frequently, avoid close contact with sick individuals, and maintain strong immunity through proper nutrition and sleep.")
    );
}

fn normalize_dynamic_fields(value: &mut Value) {
    if let Some(obj) = value.as_object_mut() {
        if obj.contains_key("generated_at") {
            obj.insert(
                "generated_at".to_string(),
                Value::String("__DYNAMIC_TIMESTAMP__".to_string()),
            );
        }
    }
}
