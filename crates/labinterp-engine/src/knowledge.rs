//! Static clinical knowledge tables.
//!
//! Per-test interpretation text and follow-up recommendations, encoded
//! as immutable tables keyed by lower-cased test identity. Keeping the
//! clinical wording here as data rather than spreading it across
//! conditional branches keeps each entry auditable and testable on its
//! own.

/// Fixed interpretation sentence for a normal result.
pub const NORMAL_INTERPRETATION: &str = "Result is within normal limits.";

/// Generic interpretation for an unrecognized test with a low result.
pub const GENERIC_LOW_INTERPRETATION: &str =
    "Low result detected. Correlate with clinical presentation and other laboratory values.";

/// Generic interpretation for an unrecognized test with a high result.
pub const GENERIC_HIGH_INTERPRETATION: &str =
    "High result detected. Correlate with clinical presentation and other laboratory values.";

/// First recommendation for any critical result.
pub const CRITICAL_NOTIFY_RECOMMENDATION: &str =
    "Notify ordering physician immediately - critical value.";

/// Second recommendation for any critical result.
pub const CRITICAL_REPEAT_RECOMMENDATION: &str =
    "Repeat test to confirm result before intervention.";

/// Fallback recommendation when no rule produced anything.
pub const FALLBACK_RECOMMENDATION: &str = "Follow up as clinically indicated.";

// =============================================================================
// Interpretation tables
// =============================================================================

/// Interpretation text for below-range results, keyed by lower-cased
/// test identity. Used for both LOW and CRITICAL_LOW.
pub const LOW_INTERPRETATIONS: &[(&str, &str)] = &[
    (
        "hemoglobin",
        "Low hemoglobin suggests anemia. Consider iron studies, vitamin B12/folate levels, and evaluation for blood loss.",
    ),
    (
        "hematocrit",
        "Low hematocrit is consistent with anemia or hemodilution.",
    ),
    (
        "wbc",
        "Leukopenia may indicate bone marrow suppression, viral infection, or medication effect.",
    ),
    (
        "platelets",
        "Thrombocytopenia increases bleeding risk. Evaluate for marrow suppression, consumption, or sequestration.",
    ),
    (
        "glucose",
        "Low glucose indicates hypoglycemia. Evaluate for insulin excess, medication effect, or endocrine disorder.",
    ),
    (
        "sodium",
        "Hyponatremia may reflect fluid overload, SIADH, or diuretic effect.",
    ),
    (
        "potassium",
        "Hypokalemia may cause muscle weakness and cardiac arrhythmias. Review diuretic use and gastrointestinal losses.",
    ),
    (
        "calcium",
        "Hypocalcemia may cause neuromuscular irritability. Check albumin and consider ionized calcium.",
    ),
    (
        "phosphorus",
        "Hypophosphatemia may reflect malnutrition, refeeding syndrome, or renal wasting.",
    ),
    (
        "magnesium",
        "Hypomagnesemia may cause arrhythmias and often accompanies hypokalemia and hypocalcemia.",
    ),
    (
        "creatinine",
        "Low creatinine may reflect reduced muscle mass and is rarely clinically significant.",
    ),
    (
        "bun",
        "Low BUN may reflect low protein intake, liver disease, or overhydration.",
    ),
    (
        "cholesterol",
        "Low total cholesterol may reflect malnutrition, liver disease, or hyperthyroidism.",
    ),
    (
        "hdl",
        "Low HDL cholesterol is associated with increased cardiovascular risk.",
    ),
    (
        "albumin",
        "Hypoalbuminemia may reflect malnutrition, liver disease, or protein loss.",
    ),
];

/// Interpretation text for above-range results, keyed by lower-cased
/// test identity. Used for both HIGH and CRITICAL_HIGH.
pub const HIGH_INTERPRETATIONS: &[(&str, &str)] = &[
    (
        "hemoglobin",
        "Elevated hemoglobin may indicate polycythemia or dehydration.",
    ),
    (
        "hematocrit",
        "Elevated hematocrit is consistent with polycythemia or volume depletion.",
    ),
    (
        "wbc",
        "Leukocytosis may indicate infection, inflammation, or a hematologic disorder.",
    ),
    (
        "platelets",
        "Thrombocytosis may be reactive or indicate a myeloproliferative disorder.",
    ),
    (
        "glucose",
        "Elevated glucose indicates hyperglycemia. Consider evaluation for diabetes mellitus if persistent.",
    ),
    (
        "sodium",
        "Hypernatremia usually reflects a free water deficit. Assess volume status and access to water.",
    ),
    (
        "potassium",
        "Hyperkalemia may cause life-threatening arrhythmias. Rule out hemolysis and review renal function.",
    ),
    (
        "calcium",
        "Hypercalcemia may indicate hyperparathyroidism or malignancy. Check PTH.",
    ),
    (
        "phosphorus",
        "Hyperphosphatemia most often reflects renal insufficiency.",
    ),
    (
        "magnesium",
        "Hypermagnesemia usually reflects renal impairment or excess intake.",
    ),
    (
        "creatinine",
        "Elevated creatinine indicates reduced renal function. Assess for acute kidney injury versus chronic kidney disease.",
    ),
    (
        "bun",
        "Elevated BUN may indicate renal impairment, dehydration, or gastrointestinal bleeding.",
    ),
    (
        "cholesterol",
        "Elevated total cholesterol increases cardiovascular risk. Consider lipid management.",
    ),
    (
        "ldl",
        "Elevated LDL cholesterol increases atherosclerotic risk. Consider statin therapy per guidelines.",
    ),
    (
        "triglycerides",
        "Elevated triglycerides increase cardiovascular and pancreatitis risk.",
    ),
    (
        "ast",
        "Elevated AST may indicate hepatocellular injury, muscle damage, or cardiac injury.",
    ),
    (
        "alt",
        "Elevated ALT suggests hepatocellular injury. Evaluate for viral, toxic, or metabolic liver disease.",
    ),
    (
        "alp",
        "Elevated alkaline phosphatase may indicate cholestasis or bone disease. Consider GGT to localize.",
    ),
    (
        "bilirubin",
        "Elevated bilirubin indicates impaired hepatic clearance or hemolysis. Fractionate into direct and indirect.",
    ),
];

// =============================================================================
// Recommendation rules
// =============================================================================

/// Which abnormality direction a recommendation rule fires on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Fires on LOW and CRITICAL_LOW.
    Low,
    /// Fires on HIGH and CRITICAL_HIGH.
    High,
}

/// One recommendation rule: lower-cased test identities it applies to,
/// the direction it fires on, and the action items it appends.
pub struct RecommendationRule {
    /// Lower-cased test identities this rule covers.
    pub tests: &'static [&'static str],
    /// Abnormality direction the rule fires on.
    pub direction: Direction,
    /// Action items appended when the rule fires, in order.
    pub actions: &'static [&'static str],
}

/// Test-specific recommendation rules, applied after any critical-value
/// entries. At most one rule fires per (test, direction) pair.
pub const RECOMMENDATION_RULES: &[RecommendationRule] = &[
    RecommendationRule {
        tests: &["glucose"],
        direction: Direction::Low,
        actions: &[
            "Assess for hypoglycemic symptoms",
            "Consider glucose administration if symptomatic",
        ],
    },
    RecommendationRule {
        tests: &["glucose"],
        direction: Direction::High,
        actions: &[
            "Assess for diabetes if fasting specimen",
            "Consider hemoglobin A1c testing",
        ],
    },
    RecommendationRule {
        tests: &["hemoglobin", "hematocrit"],
        direction: Direction::Low,
        actions: &[
            "Evaluate for anemia etiology",
            "Consider iron studies, vitamin B12, and folate levels",
        ],
    },
    RecommendationRule {
        tests: &["hemoglobin", "hematocrit"],
        direction: Direction::High,
        actions: &["Evaluate for polycythemia or dehydration"],
    },
    RecommendationRule {
        tests: &["creatinine", "bun"],
        direction: Direction::High,
        actions: &[
            "Assess renal function",
            "Review medications for nephrotoxic agents",
            "Evaluate hydration status",
        ],
    },
    RecommendationRule {
        tests: &["potassium"],
        direction: Direction::Low,
        actions: &[
            "Consider ECG monitoring",
            "Evaluate for cardiac arrhythmias",
            "Review diuretic use",
        ],
    },
    RecommendationRule {
        tests: &["potassium"],
        direction: Direction::High,
        actions: &[
            "Obtain ECG urgently",
            "Evaluate for cardiac arrhythmias",
            "Rule out hemolyzed specimen",
        ],
    },
    RecommendationRule {
        tests: &["cholesterol", "ldl"],
        direction: Direction::High,
        actions: &[
            "Recommend lipid panel follow-up",
            "Consider dietary counseling",
            "Assess cardiovascular risk factors",
        ],
    },
    RecommendationRule {
        tests: &["ast", "alt"],
        direction: Direction::High,
        actions: &[
            "Evaluate liver function",
            "Review hepatotoxic medications",
            "Consider hepatitis screening",
        ],
    },
];

/// Looks up a value in an interpretation table by lower-cased key.
pub fn lookup<'a>(table: &'a [(&str, &str)], key: &str) -> Option<&'a str> {
    table
        .iter()
        .find(|(test, _)| *test == key)
        .map(|(_, text)| *text)
}
