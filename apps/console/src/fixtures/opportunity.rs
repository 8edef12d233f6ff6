use thiserror::Error;

use crate::models::{OpportunityRef, StageFormData};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageError {
    #[error("opportunity id is missing")]
    MissingOpportunityId,
}

/// Placeholder record standing in for a backend lookup. The stage itself has
/// no stored values yet, so the form starts empty.
pub fn placeholder_opportunity(
    opportunity_id: &str,
) -> Result<(OpportunityRef, StageFormData), StageError> {
    let id = opportunity_id.trim();
    if id.is_empty() {
        return Err(StageError::MissingOpportunityId);
    }

    let opportunity = OpportunityRef {
        id: id.to_string(),
        title: format!("Opportunity {id}"),
    };

    Ok((opportunity, StageFormData::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_uses_trimmed_id_in_title() {
        let (opportunity, form) = placeholder_opportunity(" 42 ").unwrap();
        assert_eq!(opportunity.id, "42");
        assert_eq!(opportunity.title, "Opportunity 42");
        assert_eq!(form, StageFormData::default());
    }

    #[test]
    fn blank_id_is_rejected() {
        assert_eq!(
            placeholder_opportunity("   "),
            Err(StageError::MissingOpportunityId)
        );
    }
}
