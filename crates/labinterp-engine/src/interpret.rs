//! Rule-based interpretation and recommendation generation.
//!
//! Maps (test identity, abnormality status) onto clinical interpretation
//! text and an ordered list of follow-up actions, using the static
//! tables in [`crate::knowledge`]. Test identities are matched
//! case-insensitively via a single normalized-key lookup.

use labinterp_types::{AbnormalFlag, AbnormalStatus, Severity};

use crate::knowledge::{
    self, Direction, CRITICAL_NOTIFY_RECOMMENDATION, CRITICAL_REPEAT_RECOMMENDATION,
    FALLBACK_RECOMMENDATION, GENERIC_HIGH_INTERPRETATION, GENERIC_LOW_INTERPRETATION,
    NORMAL_INTERPRETATION,
};

/// Generates the clinical interpretation text for one result.
///
/// A NORMAL status yields a fixed within-normal-limits sentence. For
/// abnormal statuses the test identity is looked up (case-insensitively)
/// in the low-direction table (LOW and CRITICAL_LOW) or the
/// high-direction table (HIGH and CRITICAL_HIGH); unknown tests fall
/// back to a generic directional sentence.
///
/// # Examples
///
/// ```
/// use labinterp_engine::generate_interpretation;
/// use labinterp_types::AbnormalStatus;
///
/// let text = generate_interpretation("Glucose", AbnormalStatus::Low);
/// assert!(text.contains("hypoglycemia"));
/// ```
pub fn generate_interpretation(test_type: &str, status: AbnormalStatus) -> String {
    if status == AbnormalStatus::Normal {
        return NORMAL_INTERPRETATION.to_string();
    }

    let key = test_type.to_lowercase();
    let (table, generic) = if status.is_low() {
        (knowledge::LOW_INTERPRETATIONS, GENERIC_LOW_INTERPRETATION)
    } else {
        (knowledge::HIGH_INTERPRETATIONS, GENERIC_HIGH_INTERPRETATION)
    };

    knowledge::lookup(table, &key).unwrap_or(generic).to_string()
}

/// Generates the ordered follow-up recommendation list for one result.
///
/// Critical statuses unconditionally contribute an urgent
/// physician-notification entry and a repeat-testing entry first. Any
/// matching test-specific rule then appends its action items. The list
/// is never empty: when no rule applies, a single generic follow-up
/// entry is returned.
///
/// # Examples
///
/// ```
/// use labinterp_engine::generate_recommendations;
/// use labinterp_types::AbnormalStatus;
///
/// let recs = generate_recommendations("glucose", AbnormalStatus::Low);
/// assert!(recs.contains(&"Assess for hypoglycemic symptoms".to_string()));
///
/// let recs = generate_recommendations("troponin", AbnormalStatus::Normal);
/// assert_eq!(recs, vec!["Follow up as clinically indicated.".to_string()]);
/// ```
pub fn generate_recommendations(test_type: &str, status: AbnormalStatus) -> Vec<String> {
    let mut recommendations = Vec::new();

    if status.is_critical() {
        recommendations.push(CRITICAL_NOTIFY_RECOMMENDATION.to_string());
        recommendations.push(CRITICAL_REPEAT_RECOMMENDATION.to_string());
    }

    let key = test_type.to_lowercase();
    let direction = if status.is_low() {
        Some(Direction::Low)
    } else if status.is_high() {
        Some(Direction::High)
    } else {
        None
    };

    if let Some(direction) = direction {
        for rule in knowledge::RECOMMENDATION_RULES {
            if rule.direction == direction && rule.tests.contains(&key.as_str()) {
                recommendations.extend(rule.actions.iter().map(|a| a.to_string()));
            }
        }
    }

    if recommendations.is_empty() {
        recommendations.push(FALLBACK_RECOMMENDATION.to_string());
    }
    recommendations
}

/// Returns true when a flag warrants immediate physician notification.
///
/// Checks both the severity tier and the status variant. The two are
/// currently always consistent, but both checks are kept so the fields
/// can diverge without silently changing notification behavior.
pub fn requires_immediate_notification(flag: &AbnormalFlag) -> bool {
    flag.severity == Severity::Critical || flag.status.is_critical()
}
