use serde::Serialize;
use thiserror::Error;

/// List query errors (caller broke the request contract)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("Invalid argument `{field}`: {message}")]
    InvalidArgument {
        field: &'static str,
        message: String,
    },
}

impl QueryError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        QueryError::InvalidArgument {
            field,
            message: message.into(),
        }
    }
}

/// Tier field named in a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TierField {
    MinValue,
    MaxValue,
    Rate,
}

impl std::fmt::Display for TierField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TierField::MinValue => "min_value",
            TierField::MaxValue => "max_value",
            TierField::Rate => "rate",
        };
        f.write_str(name)
    }
}

/// Commission tier validation errors
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TierValidationError {
    #[error("{field} must be a non-negative number, got {value}")]
    NegativeValue { field: TierField, value: f64 },

    #[error("max_value {max_value} must be greater than min_value {min_value}")]
    InvalidRange { min_value: f64, max_value: f64 },

    #[error("range overlaps tier {conflicting_id} [{min_value}, {})", display_max(.max_value))]
    OverlappingRange {
        conflicting_id: String,
        min_value: f64,
        max_value: Option<f64>,
    },
}

fn display_max(max_value: &Option<f64>) -> String {
    match max_value {
        Some(v) => v.to_string(),
        None => "∞".to_string(),
    }
}

impl TierValidationError {
    /// Field the form should highlight
    pub fn field(&self) -> TierField {
        match self {
            TierValidationError::NegativeValue { field, .. } => *field,
            TierValidationError::InvalidRange { .. } => TierField::MaxValue,
            TierValidationError::OverlappingRange { .. } => TierField::MinValue,
        }
    }
}
