//! Reference range types.
//!
//! This module provides the `ReferenceRange` struct describing one
//! clinically valid normal range for a laboratory test, optionally
//! narrowed by patient age and/or gender.

/// An age interval in years, with optional bounds.
///
/// An absent bound means the interval is unbounded on that side.
/// Both bounds are inclusive.
///
/// # Examples
///
/// ```
/// use labinterp_types::AgeRange;
///
/// let pediatric = AgeRange { min: Some(0.0), max: Some(12.0) };
/// assert!(pediatric.contains(8.0));
/// assert!(pediatric.contains(12.0));
/// assert!(!pediatric.contains(12.5));
///
/// let adult = AgeRange { min: Some(18.0), max: None };
/// assert!(adult.contains(90.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgeRange {
    /// Inclusive lower bound in years, if any.
    pub min: Option<f64>,
    /// Inclusive upper bound in years, if any.
    pub max: Option<f64>,
}

impl AgeRange {
    /// Returns true if `age` falls within this interval.
    ///
    /// A missing bound never excludes an age.
    pub fn contains(&self, age: f64) -> bool {
        if let Some(min) = self.min {
            if age < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if age > max {
                return false;
            }
        }
        true
    }
}

/// One clinically valid normal range for a laboratory test.
///
/// A test may have many candidate ranges, each narrowed by age and/or
/// gender; range selection picks the single applicable one. The
/// `min_value`/`max_value` bounds are inclusive normal limits, and the
/// optional critical thresholds mark values that are life-threatening.
///
/// # Examples
///
/// ```
/// use labinterp_types::{AgeRange, ReferenceRange};
///
/// let range = ReferenceRange {
///     id: "glucose-adult".to_string(),
///     min_value: 70.0,
///     max_value: 100.0,
///     critical_low: Some(40.0),
///     critical_high: Some(500.0),
///     unit: Some("mg/dL".to_string()),
///     age_range: Some(AgeRange { min: Some(18.0), max: None }),
///     gender: None,
/// };
///
/// assert!(range.contains_age(30.0));
/// assert!(!range.gender_is("F"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceRange {
    /// Opaque identifier for this range.
    pub id: String,
    /// Inclusive lower normal bound.
    pub min_value: f64,
    /// Inclusive upper normal bound.
    pub max_value: f64,
    /// Threshold below which the value is life-threatening, if defined.
    pub critical_low: Option<f64>,
    /// Threshold above which the value is life-threatening, if defined.
    pub critical_high: Option<f64>,
    /// Display unit, informational only. Never used in comparisons.
    pub unit: Option<String>,
    /// Age restriction in years; absent means all ages.
    pub age_range: Option<AgeRange>,
    /// Gender code restriction; absent means all genders.
    pub gender: Option<String>,
}

impl ReferenceRange {
    /// Creates an unrestricted range with the given normal bounds.
    ///
    /// Critical thresholds, unit, and demographic restrictions start
    /// unset and can be filled in field-by-field.
    pub fn new(id: impl Into<String>, min_value: f64, max_value: f64) -> Self {
        Self {
            id: id.into(),
            min_value,
            max_value,
            critical_low: None,
            critical_high: None,
            unit: None,
            age_range: None,
            gender: None,
        }
    }

    /// Returns true if this range applies at the given age.
    ///
    /// An absent `age_range` applies at every age.
    pub fn contains_age(&self, age: f64) -> bool {
        match &self.age_range {
            Some(range) => range.contains(age),
            None => true,
        }
    }

    /// Returns true if this range is restricted to the given gender code.
    ///
    /// Comparison is case-insensitive. A range with no gender restriction
    /// returns false: it is not *equal* to any code, it merely does not
    /// exclude it.
    pub fn gender_is(&self, gender: &str) -> bool {
        match &self.gender {
            Some(code) => code.eq_ignore_ascii_case(gender),
            None => false,
        }
    }
}
