//! Optional health details collected after the symptom step, and the
//! request body handed to the analyzer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    #[serde(rename = "")]
    Unspecified,
    Male,
    Female,
    Other,
}

impl Gender {
    /// Form value to gender. Anything unrecognised means unspecified.
    pub fn from_form_value(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            "other" => Gender::Other,
            _ => Gender::Unspecified,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
            Gender::Unspecified => "Prefer not to say",
        }
    }

    fn is_unspecified(&self) -> bool {
        *self == Gender::Unspecified
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthDetails {
    pub age: Option<u32>,
    pub gender: Gender,
}

impl HealthDetails {
    /// Read the age field. Blank or non-numeric text clears it.
    pub fn set_age_input(&mut self, value: &str) {
        self.age = value.trim().parse().ok();
    }
}

/// Body of an analysis request. Unset details are left out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub symptoms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Gender::is_unspecified")]
    pub gender: Gender,
}

impl AnalysisRequest {
    pub fn new(symptoms: Vec<String>, details: HealthDetails) -> Self {
        Self {
            symptoms,
            age: details.age,
            gender: details.gender,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn gender_labels_default_to_prefer_not_to_say() {
        assert_eq!(Gender::from_form_value("Female").label(), "Female");
        assert_eq!(Gender::from_form_value("").label(), "Prefer not to say");
        assert_eq!(Gender::default(), Gender::Unspecified);
    }

    #[test]
    fn age_input_accepts_numbers_only() {
        let mut details = HealthDetails::default();
        details.set_age_input(" 42 ");
        assert_eq!(details.age, Some(42));
        details.set_age_input("");
        assert_eq!(details.age, None);
        details.set_age_input("forty");
        assert_eq!(details.age, None);
    }

    #[test]
    fn request_omits_unset_details() {
        let bare = AnalysisRequest::new(vec!["fever".to_string()], HealthDetails::default());
        assert_eq!(serde_json::to_value(&bare).unwrap(), json!({"symptoms": ["fever"]}));

        let full = AnalysisRequest::new(
            vec!["fever".to_string(), "cough".to_string()],
            HealthDetails {
                age: Some(30),
                gender: Gender::Other,
            },
        );
        assert_eq!(
            serde_json::to_value(&full).unwrap(),
            json!({"symptoms": ["fever", "cough"], "age": 30, "gender": "other"})
        );
    }
}
