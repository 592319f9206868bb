//! Interpretation orchestration.
//!
//! Composes range selection, abnormality classification, and the
//! interpretation rules into the single-result and batch APIs, plus a
//! plain-text report rendering.

use labinterp_types::{InterpretationResult, ReferenceRange, ResultRequest};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::classify::determine_abnormal_flag;
use crate::interpret::{
    generate_interpretation, generate_recommendations, requires_immediate_notification,
};
use crate::selector::select_normal_range;
use crate::types::EngineResult;

/// Interprets a single numeric result for a patient.
///
/// Resolves the applicable reference range, classifies the value
/// against it, and attaches interpretation text and follow-up
/// recommendations.
///
/// # Errors
///
/// Returns [`crate::EngineError::NoRangeAvailable`] when `normal_ranges`
/// is empty. This propagates uncaught: a test with no configured ranges
/// is a data problem the caller must surface, not something to default
/// around.
///
/// # Examples
///
/// ```
/// use labinterp_engine::interpret_result;
/// use labinterp_types::{AbnormalStatus, ReferenceRange};
///
/// let mut range = ReferenceRange::new("glucose-adult", 70.0, 100.0);
/// range.critical_low = Some(40.0);
/// range.unit = Some("mg/dL".to_string());
///
/// let result = interpret_result("glucose", 45.0, &[range], 30.0, None).unwrap();
/// assert_eq!(result.flag.status, AbnormalStatus::Low);
/// assert!(result.interpretation.contains("hypoglycemia"));
/// ```
pub fn interpret_result(
    test_type: &str,
    value: f64,
    normal_ranges: &[ReferenceRange],
    age: f64,
    gender: Option<&str>,
) -> EngineResult<InterpretationResult> {
    let range = select_normal_range(normal_ranges, age, gender)?;
    let flag = determine_abnormal_flag(value, range);

    if requires_immediate_notification(&flag) {
        tracing::warn!(
            test = test_type,
            value,
            status = %flag.status,
            "critical result requires immediate notification"
        );
    }

    let interpretation = generate_interpretation(test_type, flag.status);
    let recommendations = generate_recommendations(test_type, flag.status);

    Ok(InterpretationResult {
        value,
        range: range.clone(),
        flag,
        interpretation,
        recommendations: if recommendations.is_empty() {
            None
        } else {
            Some(recommendations)
        },
    })
}

/// Interprets a batch of results, one verdict per request.
///
/// Each entry is evaluated in isolation and the output preserves input
/// order: the entry at index `i` of the returned vector corresponds to
/// `requests[i]`. An entry whose test has no configured ranges yields
/// `Err` at its index and does not abort the rest of the batch.
///
/// With the default `parallel` feature the entries are fanned out
/// across the rayon thread pool; every entry is independent, so order
/// is the only coupling between them.
pub fn interpret_results(requests: &[ResultRequest]) -> Vec<EngineResult<InterpretationResult>> {
    #[cfg(feature = "parallel")]
    let iter = requests.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = requests.iter();

    let results: Vec<_> = iter
        .map(|request| {
            interpret_result(
                &request.test_type,
                request.value,
                &request.normal_ranges,
                request.age,
                request.gender.as_deref(),
            )
        })
        .collect();

    let failures = results.iter().filter(|r| r.is_err()).count();
    tracing::info!(
        total = requests.len(),
        failures,
        "batch interpretation complete"
    );
    results
}

/// Renders an interpretation result as a deterministic plain-text report.
///
/// A presentation convenience for logs and tests; not part of the
/// decision core.
pub fn format_report(test_type: &str, result: &InterpretationResult) -> String {
    let unit = result.range.unit.as_deref().unwrap_or("");
    let mut report = String::new();
    report.push_str(&format!("Test: {test_type}\n"));
    if unit.is_empty() {
        report.push_str(&format!("Value: {}\n", result.value));
        report.push_str(&format!(
            "Normal range: {}-{}\n",
            result.range.min_value, result.range.max_value
        ));
    } else {
        report.push_str(&format!("Value: {} {unit}\n", result.value));
        report.push_str(&format!(
            "Normal range: {}-{} {unit}\n",
            result.range.min_value, result.range.max_value
        ));
    }
    report.push_str(&format!(
        "Status: {} ({})\n",
        result.flag.status, result.flag.severity
    ));
    report.push_str(&format!("Interpretation: {}\n", result.interpretation));
    if let Some(recommendations) = &result.recommendations {
        report.push_str("Recommendations:\n");
        for (i, recommendation) in recommendations.iter().enumerate() {
            report.push_str(&format!("  {}. {recommendation}\n", i + 1));
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EngineError;
    use labinterp_types::{AbnormalStatus, AgeRange, Severity};

    fn glucose_range() -> ReferenceRange {
        let mut range = ReferenceRange::new("glucose-adult", 70.0, 100.0);
        range.critical_low = Some(40.0);
        range.unit = Some("mg/dL".to_string());
        range
    }

    #[test]
    fn test_scenario_low_glucose() {
        // 45 is below normal but above the critical threshold.
        let result = interpret_result("glucose", 45.0, &[glucose_range()], 30.0, None).unwrap();
        assert_eq!(result.flag.status, AbnormalStatus::Low);
        assert_eq!(result.flag.severity, Severity::Warning);
        assert!(result.interpretation.contains("hypoglycemia"));
        let recs = result.recommendations.unwrap();
        assert!(recs.contains(&"Assess for hypoglycemic symptoms".to_string()));
    }

    #[test]
    fn test_scenario_critical_low_glucose() {
        // 35 breaches the critical-low threshold.
        let result = interpret_result("glucose", 35.0, &[glucose_range()], 30.0, None).unwrap();
        assert_eq!(result.flag.status, AbnormalStatus::CriticalLow);
        assert_eq!(result.flag.severity, Severity::Critical);
        let recs = result.recommendations.unwrap();
        assert_eq!(
            recs[0],
            "Notify ordering physician immediately - critical value."
        );
    }

    #[test]
    fn test_no_range_propagates() {
        let result = interpret_result("glucose", 45.0, &[], 30.0, None);
        assert_eq!(result, Err(EngineError::NoRangeAvailable));
    }

    #[test]
    fn test_selected_range_flows_into_result() {
        let mut pediatric = ReferenceRange::new("glucose-peds", 60.0, 100.0);
        pediatric.age_range = Some(AgeRange {
            min: Some(0.0),
            max: Some(12.0),
        });
        let adult = glucose_range();

        let result =
            interpret_result("glucose", 65.0, &[pediatric, adult], 8.0, Some("F")).unwrap();
        assert_eq!(result.range.id, "glucose-peds");
        assert_eq!(result.flag.status, AbnormalStatus::Normal);
    }

    #[test]
    fn test_batch_preserves_order_and_isolates_failures() {
        let requests = vec![
            ResultRequest::new("glucose", 85.0, vec![glucose_range()], 30.0),
            ResultRequest::new("sodium", 140.0, vec![], 30.0),
            ResultRequest::new("glucose", 35.0, vec![glucose_range()], 30.0),
        ];

        let results = interpret_results(&requests);
        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].as_ref().unwrap().flag.status,
            AbnormalStatus::Normal
        );
        assert_eq!(results[1], Err(EngineError::NoRangeAvailable));
        assert_eq!(
            results[2].as_ref().unwrap().flag.status,
            AbnormalStatus::CriticalLow
        );
    }

    #[test]
    fn test_batch_unknown_test_generic_fallback() {
        // An unknown test above range gets the exact generic
        // high-direction sentence.
        let requests = vec![ResultRequest::new(
            "unknownTest",
            999.0,
            vec![ReferenceRange::new("r1", 0.0, 10.0)],
            25.0,
        )];

        let results = interpret_results(&requests);
        assert_eq!(
            results[0].as_ref().unwrap().interpretation,
            "High result detected. Correlate with clinical presentation and other laboratory values."
        );
    }

    #[test]
    fn test_format_report() {
        let result = interpret_result("glucose", 45.0, &[glucose_range()], 30.0, None).unwrap();
        let report = format_report("glucose", &result);
        assert!(report.starts_with("Test: glucose\n"));
        assert!(report.contains("Value: 45 mg/dL\n"));
        assert!(report.contains("Status: LOW (WARNING)\n"));
        assert!(report.contains("Normal range: 70-100 mg/dL\n"));
        assert!(report.contains("Interpretation: "));
        assert!(report.contains("  1. Assess for hypoglycemic symptoms\n"));
    }

    #[test]
    fn test_format_report_without_unit() {
        let mut range = glucose_range();
        range.unit = None;
        let result = interpret_result("glucose", 85.0, &[range], 30.0, None).unwrap();
        let report = format_report("glucose", &result);
        assert!(report.contains("Value: 85\n"));
        assert!(report.contains("Normal range: 70-100\n"));
    }
}
