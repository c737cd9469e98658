//! Framework-neutral WASM <-> JavaScript bridge.

use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use symptom_core::{
    suggest, AdvisoryLibrary, Catalog, Gender, IntakeKey, IntakeSession, KeyResponse,
    TrackerConfig, TrackerError,
};
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
struct JsTrackerConfig {
    #[serde(default)]
    suggestion_limit: Option<usize>,
    #[serde(default)]
    blur_close_delay_ms: Option<u64>,
    #[serde(default)]
    history_limit: Option<usize>,
    #[serde(default)]
    remedy_limit: Option<usize>,
}

impl From<JsTrackerConfig> for TrackerConfig {
    fn from(cfg: JsTrackerConfig) -> Self {
        let mut base = TrackerConfig::default();
        if let Some(limit) = cfg.suggestion_limit {
            base.suggestion_limit = limit;
        }
        if let Some(delay) = cfg.blur_close_delay_ms {
            base.blur_close_delay_ms = delay;
        }
        if let Some(limit) = cfg.history_limit {
            base.history_limit = limit;
        }
        if let Some(limit) = cfg.remedy_limit {
            base.remedy_limit = limit;
        }
        base
    }
}

fn read_config(config: Option<JsValue>) -> Result<TrackerConfig, JsValue> {
    match config {
        Some(js_cfg) if !js_cfg.is_undefined() && !js_cfg.is_null() => {
            let cfg: JsTrackerConfig = from_value(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("Could not read config: {err}")))?;
            Ok(TrackerConfig::from(cfg))
        }
        _ => Ok(TrackerConfig::default()),
    }
}

fn read_catalog(catalog: JsValue) -> Result<Catalog, JsValue> {
    if catalog.is_undefined() || catalog.is_null() {
        return Ok(Catalog::builtin());
    }
    let names: Vec<String> = from_value(catalog)
        .map_err(|err| JsValue::from_str(&format!("Could not read catalog: {err}")))?;
    Ok(Catalog::from_provider(Ok::<_, TrackerError>(names)))
}

/// Rank catalog entries for `query`, skipping already selected names.
#[wasm_bindgen]
pub fn suggest_symptoms(
    query: &str,
    catalog: JsValue,
    excluded: JsValue,
    config: Option<JsValue>,
) -> Result<JsValue, JsValue> {
    let catalog = read_catalog(catalog)?;
    let cfg = read_config(config)?;
    let excluded: Vec<String> = if excluded.is_undefined() || excluded.is_null() {
        Vec::new()
    } else {
        from_value(excluded)
            .map_err(|err| JsValue::from_str(&format!("Could not read selection: {err}")))?
    };

    let ranked = suggest(query, &catalog, &excluded, cfg.suggestion_limit);
    to_value(&ranked).map_err(|err| JsValue::from_str(&format!("Could not serialize: {err}")))
}

/// Build the dashboard report for a history payload. `advisory` optionally
/// replaces the built-in guidance content.
#[wasm_bindgen]
pub fn summarize_history(
    history: JsValue,
    advisory: Option<String>,
    config: Option<JsValue>,
) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let history_value = from_value::<serde_json::Value>(history)
        .map_err(|err| JsValue::from_str(&format!("Could not read history JSON: {err}")))?;
    let cfg = read_config(config)?;
    let library = match advisory {
        Some(json) => AdvisoryLibrary::from_json_str(&json)
            .map_err(|err| JsValue::from_str(&format_tracker_error(err)))?,
        None => AdvisoryLibrary::builtin(),
    };

    let records = symptom_history::parse_history_value(&history_value)
        .map(symptom_history::order_newest_first)
        .map_err(|err| JsValue::from_str(&format_tracker_error(err)))?;
    let report = symptom_history::summarize_history(&records, &library, &cfg);

    to_value(&report).map_err(|err| JsValue::from_str(&format!("Could not serialize report: {err}")))
}

/// One intake session bound to an input element on the JavaScript side.
#[wasm_bindgen]
pub struct Intake {
    session: IntakeSession,
}

#[wasm_bindgen]
impl Intake {
    #[wasm_bindgen(constructor)]
    pub fn new(catalog: JsValue, config: Option<JsValue>) -> Result<Intake, JsValue> {
        #[cfg(target_arch = "wasm32")]
        console_error_panic_hook::set_once();

        Ok(Intake {
            session: IntakeSession::new(read_catalog(catalog)?, read_config(config)?),
        })
    }

    pub fn focus(&mut self) {
        self.session.focus();
    }

    pub fn input(&mut self, text: &str) {
        self.session.input(text);
    }

    /// Feed a `KeyboardEvent.key`. Returns `true` when the caller should
    /// call `preventDefault`.
    pub fn key(&mut self, key: &str) -> bool {
        self.session.key(IntakeKey::from_key_name(key)) == KeyResponse::Consumed
    }

    /// Returns the blur generation and the delay in milliseconds to wait
    /// before calling `expire_blur` with that generation.
    pub fn blur(&mut self) -> Result<JsValue, JsValue> {
        let ticket = self.session.blur();
        to_value(&(ticket.generation, ticket.delay.as_millis() as u64))
            .map_err(|err| JsValue::from_str(&format!("Could not serialize: {err}")))
    }

    pub fn expire_blur(&mut self, generation: u64, delay_ms: u64) -> bool {
        self.session.expire_blur(symptom_core::BlurTicket {
            generation,
            delay: std::time::Duration::from_millis(delay_ms),
        })
    }

    pub fn select_suggestion(&mut self, name: &str) -> bool {
        self.session.select_suggestion(name)
    }

    pub fn toggle(&mut self, name: &str) -> bool {
        self.session.toggle(name)
    }

    pub fn remove(&mut self, index: usize) {
        self.session.remove(index);
    }

    pub fn clear_selection(&mut self) {
        self.session.clear_selection();
    }

    /// Selected symptoms, or an error string with the user-facing notice.
    pub fn finish(&mut self) -> Result<JsValue, JsValue> {
        let selected = self
            .session
            .finish()
            .map_err(|notice| JsValue::from_str(notice.message()))?;
        to_value(&selected).map_err(|err| JsValue::from_str(&format!("Could not serialize: {err}")))
    }

    pub fn set_age(&mut self, value: &str) {
        self.session.set_age_input(value);
    }

    pub fn set_gender(&mut self, value: &str) {
        self.session.set_gender(Gender::from_form_value(value));
    }

    pub fn gender_label(&self) -> String {
        self.session.details().gender.label().to_string()
    }

    /// `{symptoms, age?, gender?}` ready to post to the analyzer, or an
    /// error string with the user-facing notice.
    pub fn analysis_request(&mut self) -> Result<JsValue, JsValue> {
        let request = self
            .session
            .analysis_request()
            .map_err(|notice| JsValue::from_str(notice.message()))?;
        to_value(&request).map_err(|err| JsValue::from_str(&format!("Could not serialize: {err}")))
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Snapshot for rendering: input, suggestions, active index, open flag,
    /// no-results flag, notice and selection.
    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_value(&self.session.view())
            .map_err(|err| JsValue::from_str(&format!("Could not serialize: {err}")))
    }
}

fn format_tracker_error(err: TrackerError) -> String {
    format!("Symptom tracker error: {err}")
}
