use std::fmt;

use time::macros::format_description;
use time::Date;

use crate::models::{FieldKey, StageFormData};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    TextArea,
    Number,
    Date,
}

impl InputKind {
    /// Value for the HTML `type` attribute. Text areas render their own element.
    pub fn html_type(self) -> &'static str {
        match self {
            Self::Text | Self::TextArea => "text",
            Self::Number => "number",
            Self::Date => "date",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: FieldKey,
    pub label: &'static str,
    pub input: InputKind,
    pub placeholder: &'static str,
    pub required: bool,
}

pub const STAGE_TITLE: &str = "Stage 1: Project Details";

pub const STAGE_FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        key: FieldKey::ProjectTitle,
        label: "Project Title",
        input: InputKind::Text,
        placeholder: "Enter project title",
        required: true,
    },
    FieldSpec {
        key: FieldKey::ProjectDescription,
        label: "Project Description",
        input: InputKind::TextArea,
        placeholder: "Describe the project scope",
        required: false,
    },
    FieldSpec {
        key: FieldKey::EstimatedRevenue,
        label: "Estimated Revenue",
        input: InputKind::Number,
        placeholder: "0.00",
        required: true,
    },
    FieldSpec {
        key: FieldKey::ExpectedClosureDate,
        label: "Expected Closure Date",
        input: InputKind::Date,
        placeholder: "YYYY-MM-DD",
        required: true,
    },
    FieldSpec {
        key: FieldKey::Probability,
        label: "Probability (%)",
        input: InputKind::Number,
        placeholder: "0-100",
        required: false,
    },
];

pub fn field_spec(key: FieldKey) -> &'static FieldSpec {
    let index = match key {
        FieldKey::ProjectTitle => 0,
        FieldKey::ProjectDescription => 1,
        FieldKey::EstimatedRevenue => 2,
        FieldKey::ExpectedClosureDate => 3,
        FieldKey::Probability => 4,
    };
    &STAGE_FIELDS[index]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssueKind {
    Missing,
    InvalidNumber,
    OutOfRange,
    InvalidDate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldIssue {
    pub key: FieldKey,
    pub kind: IssueKind,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = field_spec(self.key).label;
        match self.kind {
            IssueKind::Missing => write!(f, "{label} is required"),
            IssueKind::InvalidNumber => write!(f, "{label} must be a non-negative number"),
            IssueKind::OutOfRange => write!(f, "{label} must be a whole number from 0 to 100"),
            IssueKind::InvalidDate => write!(f, "{label} must be a date in YYYY-MM-DD form"),
        }
    }
}

/// Checks a form against [`STAGE_FIELDS`]. Advisory: callers decide whether
/// issues block anything. Blank optional fields are never reported.
pub fn validate(form: &StageFormData) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    for spec in STAGE_FIELDS.iter() {
        let value = form.get(spec.key).trim();

        if value.is_empty() {
            if spec.required {
                issues.push(FieldIssue {
                    key: spec.key,
                    kind: IssueKind::Missing,
                });
            }
            continue;
        }

        let problem = match spec.key {
            FieldKey::EstimatedRevenue => check_revenue(value),
            FieldKey::Probability => check_probability(value),
            FieldKey::ExpectedClosureDate => check_date(value),
            FieldKey::ProjectTitle | FieldKey::ProjectDescription => None,
        };

        if let Some(kind) = problem {
            issues.push(FieldIssue {
                key: spec.key,
                kind,
            });
        }
    }

    issues
}

fn check_revenue(value: &str) -> Option<IssueKind> {
    match value.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => None,
        _ => Some(IssueKind::InvalidNumber),
    }
}

fn check_probability(value: &str) -> Option<IssueKind> {
    match value.parse::<u8>() {
        Ok(percent) if percent <= 100 => None,
        _ => Some(IssueKind::OutOfRange),
    }
}

fn check_date(value: &str) -> Option<IssueKind> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(value, format)
        .err()
        .map(|_| IssueKind::InvalidDate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> StageFormData {
        StageFormData {
            project_title: "Acme Deal".into(),
            project_description: String::new(),
            estimated_revenue: "125000.50".into(),
            expected_closure_date: "2026-12-15".into(),
            probability: "60".into(),
        }
    }

    #[test]
    fn schema_covers_every_field_once_in_order() {
        let keys: Vec<FieldKey> = STAGE_FIELDS.iter().map(|spec| spec.key).collect();
        assert_eq!(keys, FieldKey::ALL.to_vec());
    }

    #[test]
    fn every_key_resolves_to_its_own_spec() {
        for key in FieldKey::ALL {
            assert_eq!(field_spec(key).key, key);
        }
        assert_eq!(field_spec(FieldKey::Probability).label, "Probability (%)");
        assert_eq!(
            FieldIssue {
                key: FieldKey::ExpectedClosureDate,
                kind: IssueKind::InvalidDate,
            }
            .to_string(),
            "Expected Closure Date must be a date in YYYY-MM-DD form"
        );
    }

    #[test]
    fn complete_form_has_no_issues() {
        assert!(validate(&filled()).is_empty());
    }

    #[test]
    fn empty_form_reports_required_fields_only() {
        let issues = validate(&StageFormData::default());
        let missing: Vec<FieldKey> = issues.iter().map(|issue| issue.key).collect();
        assert_eq!(
            missing,
            vec![
                FieldKey::ProjectTitle,
                FieldKey::EstimatedRevenue,
                FieldKey::ExpectedClosureDate,
            ]
        );
        assert!(issues.iter().all(|issue| issue.kind == IssueKind::Missing));
    }

    #[test]
    fn malformed_values_are_flagged() {
        let mut form = filled();
        form.estimated_revenue = "-5".into();
        form.probability = "140".into();
        form.expected_closure_date = "15/12/2026".into();

        let kinds: Vec<(FieldKey, IssueKind)> = validate(&form)
            .into_iter()
            .map(|issue| (issue.key, issue.kind))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (FieldKey::EstimatedRevenue, IssueKind::InvalidNumber),
                (FieldKey::ExpectedClosureDate, IssueKind::InvalidDate),
                (FieldKey::Probability, IssueKind::OutOfRange),
            ]
        );
    }

    #[test]
    fn impossible_calendar_date_is_rejected() {
        let mut form = filled();
        form.expected_closure_date = "2026-02-30".into();
        assert_eq!(
            validate(&form),
            vec![FieldIssue {
                key: FieldKey::ExpectedClosureDate,
                kind: IssueKind::InvalidDate,
            }]
        );
    }

    #[test]
    fn issue_messages_use_labels() {
        let issue = FieldIssue {
            key: FieldKey::ProjectTitle,
            kind: IssueKind::Missing,
        };
        assert_eq!(issue.to_string(), "Project Title is required");
    }
}
