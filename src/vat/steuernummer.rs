//! German Steuernummer (tax number).

use crate::core::{ErrorCode, Field, FieldOptions, ValidationError};

use super::format::VatFormatError;

/// Two-digit ELSTER prefixes of the Bundesländer; NRW uses 50..=60.
const STATE_PREFIXES: [u32; 14] = [10, 11, 21, 22, 23, 24, 26, 27, 28, 30, 31, 32, 40, 41];

/// Validate a German Steuernummer.
///
/// Accepts the unified 13-digit ELSTER format and legacy 10-11 digit
/// numbers. The separators `/`, `-` and space are ignored; any other
/// character is rejected. Returns the bare digits on success.
pub fn validate_steuernummer(stnr: &str) -> Result<String, VatFormatError> {
    if stnr.chars().any(|c| c.is_alphabetic()) {
        return Err(VatFormatError {
            value: stnr.into(),
            reason: "must not contain letters".into(),
            code: ErrorCode::Invalid,
        });
    }

    let mut cleaned = String::with_capacity(stnr.len());
    for c in stnr.chars() {
        match c {
            '0'..='9' => cleaned.push(c),
            '/' | '-' | ' ' => {}
            _ => {
                return Err(VatFormatError {
                    value: stnr.into(),
                    reason: format!("unexpected character '{c}'"),
                    code: ErrorCode::Invalid,
                });
            }
        }
    }

    match cleaned.len() {
        13 => {
            let prefix: u32 = cleaned[..2].parse().unwrap_or(0);
            if STATE_PREFIXES.contains(&prefix) || (50..=60).contains(&prefix) {
                Ok(cleaned)
            } else {
                Err(VatFormatError {
                    value: stnr.into(),
                    reason: format!("unknown Bundesland prefix '{}'", &cleaned[..2]),
                    code: ErrorCode::Invalid,
                })
            }
        }
        10 | 11 => Ok(cleaned),
        n => Err(VatFormatError {
            value: stnr.into(),
            reason: format!("expected 13 digits (ELSTER) or 10-11 digits (legacy), got {n}"),
            code: ErrorCode::InvalidLength,
        }),
    }
}

/// [`validate_steuernummer`] as a [`Field`].
#[derive(Debug, Clone, Default)]
pub struct SteuernummerField {
    options: FieldOptions,
}

impl SteuernummerField {
    /// Required Steuernummer field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the options.
    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }
}

impl Field for SteuernummerField {
    type Output = String;

    fn options(&self) -> &FieldOptions {
        &self.options
    }

    fn convert(&self, value: &str) -> Result<String, ValidationError> {
        validate_steuernummer(value).map_err(|e| self.options.error(e.code, &e.to_string()))
    }
}
