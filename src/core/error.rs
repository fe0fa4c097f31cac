use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while constructing or configuring a field.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlavorError {
    /// A value failed validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A regular expression supplied to a field did not compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Field options are inconsistent (e.g. `min_length > max_length`).
    #[error("configuration error: {0}")]
    Config(String),
}

/// Stable machine-readable reason for a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorCode {
    /// Empty input on a required field.
    Required,
    /// Input does not have the expected shape.
    Invalid,
    /// Shape is right but the check digit does not match.
    InvalidChecksum,
    /// Input has the wrong number of characters.
    InvalidLength,
    /// Input is shorter than `FieldOptions::min_length`.
    MinLength,
    /// Input is longer than `FieldOptions::max_length`.
    MaxLength,
    /// Country code is unknown for this kind of identifier.
    InvalidCountry,
    /// Country code is valid but excluded by the field's configuration.
    CountryNotAllowed,
    /// BIC institution (bank) code is malformed.
    InvalidInstitution,
    /// BIC location code is malformed.
    InvalidLocation,
    /// BIC branch code is malformed.
    InvalidBranch,
}

impl ErrorCode {
    /// The snake_case name used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Invalid => "invalid",
            Self::InvalidChecksum => "invalid_checksum",
            Self::InvalidLength => "invalid_length",
            Self::MinLength => "min_length",
            Self::MaxLength => "max_length",
            Self::InvalidCountry => "invalid_country",
            Self::CountryNotAllowed => "country_not_allowed",
            Self::InvalidInstitution => "invalid_institution",
            Self::InvalidLocation => "invalid_location",
            Self::InvalidBranch => "invalid_branch",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation failure with its code and human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Why the value was rejected.
    pub code: ErrorCode,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    /// Create a validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Shorthand for an [`ErrorCode::Invalid`] error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Invalid, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code() {
        let err = ValidationError::new(ErrorCode::InvalidChecksum, "bad control digit");
        assert_eq!(err.to_string(), "[invalid_checksum] bad control digit");
    }

    #[test]
    fn code_names_match_serde() {
        for code in [
            ErrorCode::Required,
            ErrorCode::InvalidLength,
            ErrorCode::CountryNotAllowed,
            ErrorCode::InvalidBranch,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn validation_error_converts_into_flavor_error() {
        let err: FlavorError = ValidationError::invalid("nope").into();
        assert!(matches!(err, FlavorError::Validation(_)));
        assert_eq!(err.to_string(), "validation failed: [invalid] nope");
    }
}
