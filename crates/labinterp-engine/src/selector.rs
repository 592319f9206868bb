//! Reference range selection.
//!
//! Chooses the single applicable reference range from a set of
//! candidates given patient age and gender, using a fixed
//! specificity-priority order.

use labinterp_types::ReferenceRange;

use crate::types::{EngineError, EngineResult};

/// Selects the applicable reference range for a patient.
///
/// The selection is deterministic: candidates are scanned in order and
/// the first match at the highest-priority tier wins. The tiers encode
/// a clinical policy — the most demographically specific range wins,
/// and a range with no restriction is preferred over one restricted
/// only by the opposite demographic axis:
///
/// 1. age-containing (or age-unrestricted) AND matching gender
///    (only when a gender is supplied);
/// 2. age-containing (or age-unrestricted) AND no gender restriction;
/// 3. matching gender AND no age restriction (only when a gender is
///    supplied);
/// 4. neither age nor gender restriction;
/// 5. the first candidate, unconditionally.
///
/// Tier 1 deliberately treats a gendered range with no age restriction
/// as a full match, so it outranks a pure age-only range. Tier 5
/// guarantees the function never fails on non-empty input, even with
/// inconsistent range configuration.
///
/// Gender codes are compared case-insensitively. Age containment is
/// inclusive on both bounds.
///
/// # Errors
///
/// Returns [`EngineError::NoRangeAvailable`] when `candidates` is empty.
///
/// # Examples
///
/// ```
/// use labinterp_engine::select_normal_range;
/// use labinterp_types::{AgeRange, ReferenceRange};
///
/// let mut adult_f = ReferenceRange::new("hgb-adult-f", 12.0, 16.0);
/// adult_f.age_range = Some(AgeRange { min: Some(18.0), max: None });
/// adult_f.gender = Some("F".to_string());
/// let default = ReferenceRange::new("hgb-default", 12.0, 17.5);
///
/// let selected = select_normal_range(&[adult_f, default], 30.0, Some("f")).unwrap();
/// assert_eq!(selected.id, "hgb-adult-f");
/// ```
pub fn select_normal_range<'a>(
    candidates: &'a [ReferenceRange],
    age: f64,
    gender: Option<&str>,
) -> EngineResult<&'a ReferenceRange> {
    if candidates.is_empty() {
        return Err(EngineError::NoRangeAvailable);
    }

    if let Some(gender) = gender {
        if let Some(range) = candidates
            .iter()
            .find(|r| r.contains_age(age) && r.gender_is(gender))
        {
            tracing::debug!(range = %range.id, "selected age+gender-specific range");
            return Ok(range);
        }
    }

    if let Some(range) = candidates
        .iter()
        .find(|r| r.contains_age(age) && r.gender.is_none())
    {
        tracing::debug!(range = %range.id, "selected age-specific range");
        return Ok(range);
    }

    if let Some(gender) = gender {
        if let Some(range) = candidates
            .iter()
            .find(|r| r.gender_is(gender) && r.age_range.is_none())
        {
            tracing::debug!(range = %range.id, "selected gender-specific range");
            return Ok(range);
        }
    }

    if let Some(range) = candidates
        .iter()
        .find(|r| r.age_range.is_none() && r.gender.is_none())
    {
        tracing::debug!(range = %range.id, "selected unrestricted default range");
        return Ok(range);
    }

    // Last resort: inconsistent configuration, take the first candidate.
    let range = &candidates[0];
    tracing::debug!(range = %range.id, "no tier matched, falling back to first candidate");
    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use labinterp_types::AgeRange;

    fn range(id: &str) -> ReferenceRange {
        ReferenceRange::new(id, 10.0, 20.0)
    }

    fn age_range(min: f64, max: f64) -> Option<AgeRange> {
        Some(AgeRange {
            min: Some(min),
            max: Some(max),
        })
    }

    #[test]
    fn test_age_gender_specific_wins() {
        // Age+gender-specific beats age-only, gender-only, and default.
        let mut specific = range("specific");
        specific.age_range = age_range(18.0, 65.0);
        specific.gender = Some("F".to_string());
        let mut age_only = range("age-only");
        age_only.age_range = age_range(18.0, 65.0);
        let mut gender_only = range("gender-only");
        gender_only.gender = Some("F".to_string());
        let default = range("default");

        let candidates = vec![age_only, gender_only, default, specific];
        let selected = select_normal_range(&candidates, 30.0, Some("F")).unwrap();
        assert_eq!(selected.id, "specific");
    }

    #[test]
    fn test_scenario_pediatric_female() {
        // First candidate matches age and gender, wins over all others.
        let mut c1 = range("c1");
        c1.age_range = age_range(0.0, 12.0);
        c1.gender = Some("F".to_string());
        let mut c2 = range("c2");
        c2.age_range = age_range(0.0, 12.0);
        let mut c3 = range("c3");
        c3.gender = Some("F".to_string());
        let c4 = range("c4");

        let candidates = vec![c1, c2, c3, c4];
        let selected = select_normal_range(&candidates, 8.0, Some("F")).unwrap();
        assert_eq!(selected.id, "c1");
    }

    #[test]
    fn test_gendered_unaged_outranks_age_only() {
        // The tier-1 asymmetry: a gender-matching range with no age
        // restriction counts as a full match and beats a pure age range.
        let mut age_only = range("age-only");
        age_only.age_range = age_range(18.0, 65.0);
        let mut gendered = range("gendered");
        gendered.gender = Some("M".to_string());

        let candidates = vec![age_only, gendered];
        let selected = select_normal_range(&candidates, 40.0, Some("m")).unwrap();
        assert_eq!(selected.id, "gendered");
    }

    #[test]
    fn test_no_gender_supplied_skips_gendered_ranges() {
        let mut gendered = range("gendered");
        gendered.gender = Some("F".to_string());
        let mut age_only = range("age-only");
        age_only.age_range = age_range(18.0, 65.0);

        let candidates = vec![gendered, age_only];
        let selected = select_normal_range(&candidates, 40.0, None).unwrap();
        assert_eq!(selected.id, "age-only");
    }

    #[test]
    fn test_gender_only_tier_ignores_age_bounded_gendered_range() {
        // A gendered range whose age window excludes the patient is not
        // picked at tier 3 either: tier 3 requires no age restriction.
        let mut wrong_age = range("wrong-age");
        wrong_age.age_range = age_range(0.0, 12.0);
        wrong_age.gender = Some("F".to_string());
        let mut unaged = range("unaged");
        unaged.gender = Some("F".to_string());

        let candidates = vec![wrong_age, unaged];
        let selected = select_normal_range(&candidates, 40.0, Some("F")).unwrap();
        assert_eq!(selected.id, "unaged");
    }

    #[test]
    fn test_universal_default_tier() {
        let mut wrong_age = range("wrong-age");
        wrong_age.age_range = age_range(0.0, 12.0);
        let default = range("default");

        let candidates = vec![wrong_age, default];
        let selected = select_normal_range(&candidates, 40.0, None).unwrap();
        assert_eq!(selected.id, "default");
    }

    #[test]
    fn test_fallback_totality() {
        // Nothing matches any tier, first candidate still returned.
        let mut wrong_age = range("wrong-age");
        wrong_age.age_range = age_range(0.0, 12.0);
        wrong_age.gender = Some("M".to_string());
        let mut also_wrong = range("also-wrong");
        also_wrong.age_range = age_range(65.0, 120.0);
        also_wrong.gender = Some("M".to_string());

        let candidates = vec![wrong_age, also_wrong];
        let selected = select_normal_range(&candidates, 40.0, Some("F")).unwrap();
        assert_eq!(selected.id, "wrong-age");
    }

    #[test]
    fn test_empty_candidates_fails() {
        let result = select_normal_range(&[], 30.0, Some("F"));
        assert_eq!(result, Err(EngineError::NoRangeAvailable));
    }

    #[test]
    fn test_age_bounds_inclusive() {
        let mut bounded = range("bounded");
        bounded.age_range = age_range(18.0, 65.0);
        let default = range("default");

        let candidates = vec![bounded, default];
        assert_eq!(
            select_normal_range(&candidates, 18.0, None).unwrap().id,
            "bounded"
        );
        assert_eq!(
            select_normal_range(&candidates, 65.0, None).unwrap().id,
            "bounded"
        );
        assert_eq!(
            select_normal_range(&candidates, 65.1, None).unwrap().id,
            "default"
        );
    }
}
