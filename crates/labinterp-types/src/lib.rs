//! # labinterp-types
//!
//! Type definitions for clinical laboratory result interpretation.
//!
//! This crate provides the immutable value types consumed and produced
//! by the interpretation engine: reference ranges with optional
//! age/gender restrictions, abnormality statuses with severity tiers,
//! and the assembled interpretation result.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use labinterp_types::{AbnormalStatus, AgeRange, ReferenceRange, Severity};
//!
//! let range = ReferenceRange {
//!     id: "k-adult".to_string(),
//!     min_value: 3.5,
//!     max_value: 5.0,
//!     critical_low: Some(2.5),
//!     critical_high: Some(6.5),
//!     unit: Some("mmol/L".to_string()),
//!     age_range: Some(AgeRange { min: Some(18.0), max: None }),
//!     gender: None,
//! };
//!
//! assert!(range.contains_age(40.0));
//! assert_eq!(AbnormalStatus::CriticalHigh.severity(), Severity::Critical);
//! ```
//!
//! ## Without Serde
//!
//! To use this crate without serde (zero dependencies):
//!
//! ```toml
//! [dependencies]
//! labinterp-types = { version = "0.1", default-features = false }
//! ```

#![warn(missing_docs)]

mod flag;
mod range;
mod result;

// Re-export all public types at crate root
pub use flag::{AbnormalFlag, AbnormalStatus, Severity};
pub use range::{AgeRange, ReferenceRange};
pub use result::{InterpretationResult, ResultRequest};
