//! Steps applied after the category is chosen.

use tracing::debug;

use nodule_model::{LungRadsCategory, LungRadsInput, LungRadsResult};

pub const MULTIPLE_NODULES_NOTE: &str =
    "Multiple nodules present. Assign category based on the most suspicious nodule.";

pub const S_MODIFIER_NOTE: &str = "S modifier: clinically significant or potentially \
    significant non-lung-cancer findings present.";

pub(crate) const UPGRADE_4X_SUFFIX: &str = " Additional features increase suspicion for malignancy.";

pub(crate) const UPGRADE_4X_NOTE: &str = "Upgraded to 4X due to additional suspicious features \
    (spiculation, lymphadenopathy, chest wall involvement, etc.).";

/// Category 3, 4A or 4B with additional suspicious features becomes 4X.
///
/// The replaced category is kept as `base_category`; `is_reclassified`
/// stays false since this is an escalation, not stepped management.
pub(crate) fn upgrade_to_4x(result: LungRadsResult, input: &LungRadsInput) -> LungRadsResult {
    if !input.has_additional_suspicious_features || !result.category.is_upgradable_to_4x() {
        return result;
    }

    debug!(base = %result.category, "upgrading to 4X");
    let upgraded = LungRadsResult::new(
        LungRadsCategory::Cat4X,
        format!("{}{UPGRADE_4X_SUFFIX}", result.management),
    )
    .with_base_category(result.category);
    let upgraded = match result.additional_notes {
        Some(notes) => upgraded.with_notes(notes),
        None => upgraded,
    };
    upgraded.with_appended_note(UPGRADE_4X_NOTE)
}

/// Notes and flags that never change the category.
pub(crate) fn annotate(result: LungRadsResult, input: &LungRadsInput) -> LungRadsResult {
    let result = if input.is_multiple {
        result.with_appended_note(MULTIPLE_NODULES_NOTE)
    } else {
        result
    };

    let result = result.with_s_modifier(input.has_s_modifier_findings);
    if input.has_s_modifier_findings {
        result.with_appended_note(S_MODIFIER_NOTE)
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suspicious() -> LungRadsInput {
        LungRadsInput {
            has_additional_suspicious_features: true,
            ..LungRadsInput::default()
        }
    }

    #[test]
    fn upgrade_keeps_base_without_reclassifying() {
        let result = LungRadsResult::new(LungRadsCategory::Cat3, "6-month LDCT.");
        let upgraded = upgrade_to_4x(result, &suspicious());
        assert_eq!(upgraded.category, LungRadsCategory::Cat4X);
        assert_eq!(upgraded.base_category, Some(LungRadsCategory::Cat3));
        assert!(!upgraded.is_reclassified);
        assert_eq!(
            upgraded.management,
            "6-month LDCT. Additional features increase suspicion for malignancy."
        );
        assert_eq!(upgraded.probability_of_malignancy, "> 15%");
    }

    #[test]
    fn category_two_is_not_upgraded() {
        let result = LungRadsResult::new(LungRadsCategory::Cat2, "Annual.");
        assert_eq!(upgrade_to_4x(result.clone(), &suspicious()), result);
    }

    #[test]
    fn annotate_twice_is_idempotent() {
        let input = LungRadsInput {
            is_multiple: true,
            has_s_modifier_findings: true,
            ..LungRadsInput::default()
        };
        let once = annotate(LungRadsResult::new(LungRadsCategory::Cat2, "Annual."), &input);
        let twice = annotate(once.clone(), &input);
        assert_eq!(once, twice);
        assert!(once.has_s_modifier);
        assert_eq!(
            once.additional_notes.as_deref(),
            Some(
                "Multiple nodules present. Assign category based on the most suspicious nodule. \
                 S modifier: clinically significant or potentially significant non-lung-cancer \
                 findings present."
            )
        );
    }
}
