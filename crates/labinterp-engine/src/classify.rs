//! Abnormality classification.
//!
//! Compares a numeric value against a reference range's critical and
//! normal bounds and emits a severity-tagged status with a generated
//! message.

use labinterp_types::{AbnormalFlag, AbnormalStatus, ReferenceRange};

/// Classifies a value against a reference range.
///
/// Rules are evaluated in order and the first match wins, so critical
/// thresholds take precedence over the normal bounds even where the
/// intervals overlap. All comparisons are strict: a value exactly equal
/// to a bound or threshold does not breach it.
///
/// # Examples
///
/// ```
/// use labinterp_engine::determine_abnormal_flag;
/// use labinterp_types::{AbnormalStatus, ReferenceRange, Severity};
///
/// let mut range = ReferenceRange::new("glucose", 70.0, 100.0);
/// range.critical_low = Some(40.0);
///
/// let flag = determine_abnormal_flag(45.0, &range);
/// assert_eq!(flag.status, AbnormalStatus::Low);
/// assert_eq!(flag.severity, Severity::Warning);
///
/// let flag = determine_abnormal_flag(35.0, &range);
/// assert_eq!(flag.status, AbnormalStatus::CriticalLow);
/// assert_eq!(flag.severity, Severity::Critical);
/// ```
pub fn determine_abnormal_flag(value: f64, range: &ReferenceRange) -> AbnormalFlag {
    if let Some(critical_low) = range.critical_low {
        if value < critical_low {
            return flag(
                AbnormalStatus::CriticalLow,
                format!("Critical low: {value} (below critical threshold {critical_low})"),
            );
        }
    }
    if let Some(critical_high) = range.critical_high {
        if value > critical_high {
            return flag(
                AbnormalStatus::CriticalHigh,
                format!("Critical high: {value} (above critical threshold {critical_high})"),
            );
        }
    }
    if value < range.min_value {
        return flag(
            AbnormalStatus::Low,
            format!(
                "Low: {value} (below normal range {}-{})",
                range.min_value, range.max_value
            ),
        );
    }
    if value > range.max_value {
        return flag(
            AbnormalStatus::High,
            format!(
                "High: {value} (above normal range {}-{})",
                range.min_value, range.max_value
            ),
        );
    }
    flag(
        AbnormalStatus::Normal,
        format!(
            "Normal: {value} (normal range {}-{})",
            range.min_value, range.max_value
        ),
    )
}

fn flag(status: AbnormalStatus, message: String) -> AbnormalFlag {
    AbnormalFlag {
        status,
        severity: status.severity(),
        message,
    }
}
