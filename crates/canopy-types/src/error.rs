use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error category, determined by error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Validation,
    NotFound,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::NotFound => write!(f, "not found"),
        }
    }
}

/// Numeric error code (V100–V199, N200–N299).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    // ── Validation errors (V100–V199) ──
    pub const NEGATIVE_QUANTITY: Self = Self(100);
    pub const SURVIVAL_OUT_OF_RANGE: Self = Self(101);
    pub const NON_POSITIVE_HORIZON: Self = Self(102);
    pub const DUPLICATE_SPECIES: Self = Self(103);
    pub const EMPTY_SPECIES_NAME: Self = Self(104);
    pub const INVALID_MODEL_PARAMETER: Self = Self(105);
    pub const MALFORMED_INPUT: Self = Self(106);
    pub const QUANTITY_TOO_LARGE: Self = Self(107);
    pub const ESTIMATE_OUT_OF_RANGE: Self = Self(108);

    // ── Lookup errors (N200–N299) ──
    pub const UNKNOWN_SPECIES: Self = Self(200);
    pub const NO_VALID_SPECIES: Self = Self(201);
    pub const UNKNOWN_CATEGORY: Self = Self(202);

    /// Get the category for this error code.
    pub fn category(self) -> ErrorCategory {
        match self.0 {
            200..=299 => ErrorCategory::NotFound,
            _ => ErrorCategory::Validation,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category() {
            ErrorCategory::Validation => write!(f, "V{}", self.0),
            ErrorCategory::NotFound => write!(f, "N{}", self.0),
        }
    }
}

/// A structured Canopy error.
///
/// Hosts render these directly; they must not parse the message text.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{code} [{category}] {message}")]
pub struct CanopyError {
    /// Error code (e.g., V101).
    pub code: ErrorCode,
    /// Error category (derived from code).
    pub category: ErrorCategory,
    /// Human-readable error message.
    pub message: String,
    /// Species name or field the error is about, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl CanopyError {
    /// Create a new error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            category: code.category(),
            message: message.into(),
            subject: None,
        }
    }

    /// Attach the species name or field the error refers to.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Shorthand for an unknown species lookup.
    pub fn unknown_species(name: &str) -> Self {
        Self::new(
            ErrorCode::UNKNOWN_SPECIES,
            format!("unknown species '{name}'"),
        )
        .with_subject(name)
    }

    /// Shorthand for a rejected horizon.
    pub fn non_positive_horizon(horizon_years: i64) -> Self {
        Self::new(
            ErrorCode::NON_POSITIVE_HORIZON,
            format!("horizon must be a positive number of years, got {horizon_years}"),
        )
        .with_subject("horizon_years")
    }

    /// Shorthand for an estimate that does not fit in whole kilograms.
    pub fn estimate_out_of_range(subject: &str) -> Self {
        Self::new(
            ErrorCode::ESTIMATE_OUT_OF_RANGE,
            format!("CO₂ estimate for '{subject}' is too large to represent"),
        )
        .with_subject(subject)
    }

    pub fn is_validation(&self) -> bool {
        self.category == ErrorCategory::Validation
    }

    pub fn is_not_found(&self) -> bool {
        self.category == ErrorCategory::NotFound
    }
}
