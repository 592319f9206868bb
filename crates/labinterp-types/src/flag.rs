//! Abnormality status and severity types.
//!
//! This module provides the enumerations used to classify a numeric
//! result against its reference range, and the `AbnormalFlag` struct
//! pairing a status with its severity tier and a generated message.

/// Classification of a result relative to its reference range.
///
/// The five statuses are mutually exclusive; critical statuses take
/// precedence over plain low/high when thresholds overlap.
///
/// # Examples
///
/// ```
/// use labinterp_types::{AbnormalStatus, Severity};
///
/// assert_eq!(AbnormalStatus::CriticalLow.severity(), Severity::Critical);
/// assert!(AbnormalStatus::CriticalLow.is_low());
/// assert_eq!(AbnormalStatus::High.as_str(), "HIGH");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum AbnormalStatus {
    /// Value is within the normal range.
    Normal,
    /// Value is below the normal range.
    Low,
    /// Value is above the normal range.
    High,
    /// Value is below the critical-low threshold.
    CriticalLow,
    /// Value is above the critical-high threshold.
    CriticalHigh,
}

impl AbnormalStatus {
    /// Returns the severity tier paired with this status.
    pub fn severity(self) -> Severity {
        match self {
            Self::Normal => Severity::Info,
            Self::Low | Self::High => Severity::Warning,
            Self::CriticalLow | Self::CriticalHigh => Severity::Critical,
        }
    }

    /// Returns true for LOW and CRITICAL_LOW.
    pub fn is_low(self) -> bool {
        matches!(self, Self::Low | Self::CriticalLow)
    }

    /// Returns true for HIGH and CRITICAL_HIGH.
    pub fn is_high(self) -> bool {
        matches!(self, Self::High | Self::CriticalHigh)
    }

    /// Returns true for CRITICAL_LOW and CRITICAL_HIGH.
    pub fn is_critical(self) -> bool {
        matches!(self, Self::CriticalLow | Self::CriticalHigh)
    }

    /// Returns the canonical uppercase name of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Low => "LOW",
            Self::High => "HIGH",
            Self::CriticalLow => "CRITICAL_LOW",
            Self::CriticalHigh => "CRITICAL_HIGH",
        }
    }
}

impl std::fmt::Display for AbnormalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency classification attached to an abnormality status.
///
/// Ordered from least to most urgent, so a batch of flags can be
/// reduced with `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Severity {
    /// Result is informational only.
    Info,
    /// Result is abnormal and warrants review.
    Warning,
    /// Result is life-threatening and requires urgent action.
    Critical,
}

impl Severity {
    /// Returns the canonical uppercase name of this severity.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A severity-tagged abnormality classification for one result.
///
/// Produced by the classifier; the status and severity are carried as
/// separate fields even though they currently always pair up, so the
/// two can diverge in a future revision without a type change.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbnormalFlag {
    /// Which side of the range (if any) the value breached.
    pub status: AbnormalStatus,
    /// Urgency tier for this classification.
    pub severity: Severity,
    /// Human-readable message embedding the value and the relevant
    /// threshold(s), of the form `"<Label>: <value> (<context>)"`.
    pub message: String,
}

impl AbnormalFlag {
    /// Returns true unless the status is NORMAL.
    pub fn is_abnormal(&self) -> bool {
        self.status != AbnormalStatus::Normal
    }
}
