use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpportunityRef {
    pub id: String,
    pub title: String,
}

/// Editable values of a single opportunity stage. Everything is kept as the raw
/// input string; interpretation happens in [`crate::schema::validate`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StageFormData {
    #[serde(default)]
    pub project_title: String,
    #[serde(default)]
    pub project_description: String,
    #[serde(default)]
    pub estimated_revenue: String,
    #[serde(default)]
    pub expected_closure_date: String,
    #[serde(default)]
    pub probability: String,
}

impl StageFormData {
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::ProjectTitle => &self.project_title,
            FieldKey::ProjectDescription => &self.project_description,
            FieldKey::EstimatedRevenue => &self.estimated_revenue,
            FieldKey::ExpectedClosureDate => &self.expected_closure_date,
            FieldKey::Probability => &self.probability,
        }
    }

    pub fn set(&mut self, key: FieldKey, value: String) {
        let slot = match key {
            FieldKey::ProjectTitle => &mut self.project_title,
            FieldKey::ProjectDescription => &mut self.project_description,
            FieldKey::EstimatedRevenue => &mut self.estimated_revenue,
            FieldKey::ExpectedClosureDate => &mut self.expected_closure_date,
            FieldKey::Probability => &mut self.probability,
        };
        *slot = value;
    }

    pub fn is_blank(&self) -> bool {
        FieldKey::ALL
            .iter()
            .all(|key| self.get(*key).trim().is_empty())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    ProjectTitle,
    ProjectDescription,
    EstimatedRevenue,
    ExpectedClosureDate,
    Probability,
}

impl FieldKey {
    pub const ALL: [FieldKey; 5] = [
        FieldKey::ProjectTitle,
        FieldKey::ProjectDescription,
        FieldKey::EstimatedRevenue,
        FieldKey::ExpectedClosureDate,
        FieldKey::Probability,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProjectTitle => "project_title",
            Self::ProjectDescription => "project_description",
            Self::EstimatedRevenue => "estimated_revenue",
            Self::ExpectedClosureDate => "expected_closure_date",
            Self::Probability => "probability",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serde_name() {
        for key in FieldKey::ALL {
            let json = serde_json::to_value(key).unwrap();
            assert_eq!(json, key.to_string());
        }
    }

    #[test]
    fn serde_uses_snake_case_field_names() {
        let mut form = StageFormData::default();
        form.set(FieldKey::ExpectedClosureDate, "2026-12-01".into());
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["expected_closure_date"], "2026-12-01");
        assert_eq!(json["project_title"], "");

        let parsed: StageFormData =
            serde_json::from_str(r#"{"probability":"40"}"#).unwrap();
        assert_eq!(parsed.probability, "40");
        assert_eq!(parsed.project_title, "");
    }

    #[test]
    fn blank_ignores_whitespace() {
        let mut form = StageFormData::default();
        assert!(form.is_blank());
        form.set(FieldKey::ProjectDescription, "  \n".into());
        assert!(form.is_blank());
        form.set(FieldKey::Probability, "5".into());
        assert!(!form.is_blank());
    }
}
