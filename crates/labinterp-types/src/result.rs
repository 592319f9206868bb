//! Interpretation input and output aggregates.

use crate::{AbnormalFlag, ReferenceRange};

/// The structured verdict for one interpreted result.
///
/// Aggregates the input value, the reference range that was resolved for
/// the patient, the abnormality classification, the clinical
/// interpretation text, and any follow-up recommendations. Constructed
/// fresh per call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterpretationResult {
    /// The numeric result value that was interpreted.
    pub value: f64,
    /// The reference range selected for this patient.
    pub range: ReferenceRange,
    /// Severity-tagged abnormality classification.
    pub flag: AbnormalFlag,
    /// Free-text clinical interpretation.
    pub interpretation: String,
    /// Ordered follow-up recommendations; omitted when empty, never
    /// present-but-empty.
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none", default)
    )]
    pub recommendations: Option<Vec<String>>,
}

/// One entry in a batch interpretation request.
///
/// # Examples
///
/// ```
/// use labinterp_types::{ReferenceRange, ResultRequest};
///
/// let request = ResultRequest::new("glucose", 45.0, vec![ReferenceRange::new("r1", 70.0, 100.0)], 30.0)
///     .with_gender("F");
/// assert_eq!(request.test_type, "glucose");
/// assert_eq!(request.gender.as_deref(), Some("F"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultRequest {
    /// Test identity, matched case-insensitively against the knowledge
    /// tables.
    pub test_type: String,
    /// The numeric result value.
    pub value: f64,
    /// Candidate reference ranges for this test.
    pub normal_ranges: Vec<ReferenceRange>,
    /// Patient age in years.
    pub age: f64,
    /// Patient gender code, if known.
    pub gender: Option<String>,
}

impl ResultRequest {
    /// Creates a request with no gender.
    pub fn new(
        test_type: impl Into<String>,
        value: f64,
        normal_ranges: Vec<ReferenceRange>,
        age: f64,
    ) -> Self {
        Self {
            test_type: test_type.into(),
            value,
            normal_ranges,
            age,
            gender: None,
        }
    }

    /// Sets the patient gender code.
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }
}
