//! Controlled symptom vocabulary.

use std::collections::HashSet;
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::suggest::normalize;

/// Vocabulary used when the catalog provider fails or returns nothing.
pub const DEFAULT_SYMPTOMS: &[&str] = &[
    "headache",
    "fever",
    "cough",
    "sore throat",
    "runny nose",
    "nausea",
    "vomiting",
    "diarrhea",
    "fatigue",
    "dizziness",
    "shortness of breath",
    "abdominal pain",
    "back pain",
    "chest pain",
    "muscle pain",
    "rash",
    "itchy eyes",
];

/// Quick options offered next to the free-text input.
pub const POPULAR_SYMPTOMS: &[&str] = &[
    "fever",
    "cough",
    "headache",
    "sore throat",
    "runny nose",
    "fatigue",
    "shortness of breath",
    "chest pain",
];

/// Canonical symptom names, unique under case-insensitive comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Catalog {
    names: Vec<String>,
}

impl From<Vec<String>> for Catalog {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<Catalog> for Vec<String> {
    fn from(catalog: Catalog) -> Self {
        catalog.names
    }
}

impl Catalog {
    /// Build a catalog keeping the first spelling of every name. Blank entries
    /// are dropped; surrounding whitespace is trimmed.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        for name in names {
            let trimmed = name.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }
            if seen.insert(normalize(trimmed)) {
                kept.push(trimmed.to_string());
            }
        }
        Self { names: kept }
    }

    /// The built-in vocabulary, in its curated order.
    pub fn builtin() -> Self {
        Self::new(DEFAULT_SYMPTOMS.iter().copied())
    }

    /// Accept the result of a catalog fetch. Names are lowercased,
    /// de-duplicated and sorted; a failed or empty fetch degrades to
    /// [`Catalog::builtin`].
    pub fn from_provider<E: Display>(fetched: Result<Vec<String>, E>) -> Self {
        match fetched {
            Ok(names) => {
                let mut lowered: Vec<String> = names
                    .iter()
                    .map(|name| normalize(name))
                    .filter(|name| !name.is_empty())
                    .collect();
                lowered.sort();
                lowered.dedup();
                if lowered.is_empty() {
                    warn!("catalog provider returned no symptoms, using built-in catalog");
                    return Self::builtin();
                }
                debug!(count = lowered.len(), "loaded symptom catalog");
                Self { names: lowered }
            }
            Err(err) => {
                warn!(error = %err, "catalog fetch failed, using built-in catalog");
                Self::builtin()
            }
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Canonical spelling of `name`, matched exactly after normalization.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        let wanted = normalize(name);
        if wanted.is_empty() {
            return None;
        }
        self.names
            .iter()
            .find(|candidate| normalize(candidate) == wanted)
            .map(String::as_str)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
