//! # labinterp-engine
//!
//! Clinical result interpretation engine.
//!
//! Takes a raw numeric laboratory value plus patient context (age,
//! gender) and produces a structured clinical verdict: which reference
//! range applies, whether the value is abnormal or critical, a textual
//! interpretation, and follow-up recommendations.
//!
//! The engine is three pure functions plus an orchestrator, all
//! stateless and free of I/O:
//!
//! - [`select_normal_range`] — priority-ordered reference range selection;
//! - [`determine_abnormal_flag`] — threshold-based severity classification;
//! - [`generate_interpretation`] / [`generate_recommendations`] — rule-based
//!   text generation from static knowledge tables;
//! - [`interpret_result`] / [`interpret_results`] — single and batch
//!   composition of the above.
//!
//! ## Features
//!
//! - `parallel` (default): fans batch interpretation out across the
//!   rayon thread pool. Every entry is independent, so this only
//!   changes throughput, never results or ordering.
//!
//! ## Usage
//!
//! ```rust
//! use labinterp_engine::{interpret_result, requires_immediate_notification};
//! use labinterp_types::{AbnormalStatus, ReferenceRange};
//!
//! let mut range = ReferenceRange::new("k-adult", 3.5, 5.0);
//! range.critical_high = Some(6.5);
//! range.unit = Some("mmol/L".to_string());
//!
//! let result = interpret_result("potassium", 7.1, &[range], 54.0, Some("M"))?;
//! assert_eq!(result.flag.status, AbnormalStatus::CriticalHigh);
//! assert!(requires_immediate_notification(&result.flag));
//! # Ok::<(), labinterp_engine::EngineError>(())
//! ```

#![warn(missing_docs)]

mod classify;
mod engine;
mod interpret;
pub mod knowledge;
mod selector;
mod types;

// Re-export labinterp-types for convenience
pub use labinterp_types;

pub use classify::determine_abnormal_flag;
pub use engine::{format_report, interpret_result, interpret_results};
pub use interpret::{
    generate_interpretation, generate_recommendations, requires_immediate_notification,
};
pub use selector::select_normal_range;
pub use types::{EngineError, EngineResult};
