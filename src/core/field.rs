use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::checksum::{CheckDigit, digits};
use super::error::{ErrorCode, FlavorError, ValidationError};

const REQUIRED_MESSAGE: &str = "This field is required.";

/// Per-field configuration shared by every field type.
///
/// Deserializable so applications can keep field settings in config files;
/// missing keys fall back to [`FieldOptions::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOptions {
    /// Reject empty input with [`ErrorCode::Required`]. Default: `true`.
    pub required: bool,
    /// Trim surrounding whitespace before validation. Default: `true`.
    pub strip: bool,
    /// Minimum length in characters of the normalized value.
    pub min_length: Option<usize>,
    /// Maximum length in characters of the normalized value.
    pub max_length: Option<usize>,
    /// Replacement messages keyed by error code.
    pub messages: BTreeMap<ErrorCode, String>,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            required: true,
            strip: true,
            min_length: None,
            max_length: None,
            messages: BTreeMap::new(),
        }
    }
}

impl FieldOptions {
    /// Required field with whitespace stripping and no length limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Field that accepts empty input (cleaned to `None`).
    pub fn optional() -> Self {
        Self {
            required: false,
            ..Self::default()
        }
    }

    /// Set whether empty input is rejected.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set whether surrounding whitespace is trimmed.
    pub fn strip(mut self, strip: bool) -> Self {
        self.strip = strip;
        self
    }

    /// Set the minimum length.
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Set the maximum length.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Replace the default message for `code`.
    pub fn message(mut self, code: ErrorCode, text: impl Into<String>) -> Self {
        self.messages.insert(code, text.into());
        self
    }

    /// Check that the options are internally consistent.
    pub fn validate(&self) -> Result<(), FlavorError> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(FlavorError::Config(format!(
                    "min_length {min} exceeds max_length {max}"
                )));
            }
        }
        Ok(())
    }

    /// Build an error for `code`, preferring a configured override over `default`.
    pub fn error(&self, code: ErrorCode, default: &str) -> ValidationError {
        let message = self
            .messages
            .get(&code)
            .cloned()
            .unwrap_or_else(|| default.to_string());
        ValidationError::new(code, message)
    }

    fn check_length(&self, value: &str) -> Result<(), ValidationError> {
        let len = value.chars().count();
        if let Some(max) = self.max_length {
            if len > max {
                return Err(self.error(
                    ErrorCode::MaxLength,
                    &format!("Ensure this value has at most {max} characters (it has {len})."),
                ));
            }
        }
        if let Some(min) = self.min_length {
            if len < min {
                return Err(self.error(
                    ErrorCode::MinLength,
                    &format!("Ensure this value has at least {min} characters (it has {len})."),
                ));
            }
        }
        Ok(())
    }
}

/// A validator that turns raw user input into a cleaned value.
///
/// Implementors provide [`Field::convert`]; the provided [`Field::clean`]
/// handles whitespace stripping, normalization, the `required` flag and
/// length limits before delegating.
pub trait Field {
    /// The cleaned value produced on success.
    type Output;

    /// Options controlling the shared cleaning steps.
    fn options(&self) -> &FieldOptions;

    /// Field-specific normalization applied after stripping (e.g. removing
    /// separators). Defaults to the identity.
    fn normalize(&self, value: &str) -> String {
        value.to_string()
    }

    /// Validate a non-empty normalized value.
    fn convert(&self, value: &str) -> Result<Self::Output, ValidationError>;

    /// Clean raw input.
    ///
    /// Returns `Ok(None)` for empty input on an optional field.
    fn clean(&self, raw: &str) -> Result<Option<Self::Output>, ValidationError> {
        let options = self.options();
        let stripped = if options.strip { raw.trim() } else { raw };
        let value = self.normalize(stripped);

        if value.is_empty() {
            if options.required {
                debug!(code = %ErrorCode::Required, "rejected empty input");
                return Err(options.error(ErrorCode::Required, REQUIRED_MESSAGE));
            }
            return Ok(None);
        }

        let result = options
            .check_length(&value)
            .and_then(|()| self.convert(&value));
        match &result {
            Ok(_) => trace!(len = value.len(), "accepted input"),
            Err(err) => debug!(code = %err.code, "rejected input"),
        }
        result.map(Some)
    }

    /// Whether `raw` cleans successfully.
    fn is_valid(&self, raw: &str) -> bool {
        self.clean(raw).is_ok()
    }
}

/// A field validated by a regular expression; the output is the matched input.
#[derive(Debug, Clone)]
pub struct RegexField {
    regex: Regex,
    options: FieldOptions,
    message: &'static str,
}

impl RegexField {
    /// Compile `pattern` into a new field.
    pub fn new(pattern: &str) -> Result<Self, FlavorError> {
        Ok(Self::from_regex(Regex::new(pattern)?))
    }

    /// Wrap an already compiled expression.
    pub fn from_regex(regex: Regex) -> Self {
        Self {
            regex,
            options: FieldOptions::default(),
            message: "Enter a valid value.",
        }
    }

    /// Replace the options.
    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the default message for [`ErrorCode::Invalid`].
    pub fn with_message(mut self, message: &'static str) -> Self {
        self.message = message;
        self
    }

    /// The expression input is matched against.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl Field for RegexField {
    type Output = String;

    fn options(&self) -> &FieldOptions {
        &self.options
    }

    fn convert(&self, value: &str) -> Result<String, ValidationError> {
        if self.regex.is_match(value) {
            Ok(value.to_string())
        } else {
            Err(self.options.error(ErrorCode::Invalid, self.message))
        }
    }
}

/// A digits-only field guarded by a check digit scheme.
///
/// Spaces and hyphens are removed before validation; the output is the
/// bare digit string.
#[derive(Debug, Clone)]
pub struct ChecksumField<C> {
    scheme: C,
    lengths: Vec<usize>,
    options: FieldOptions,
    message: &'static str,
}

impl<C: CheckDigit> ChecksumField<C> {
    /// Create a field accepting any of `lengths` digits (empty = any length).
    pub fn new(scheme: C, lengths: &[usize]) -> Self {
        Self {
            scheme,
            lengths: lengths.to_vec(),
            options: FieldOptions::default(),
            message: "Enter a valid number.",
        }
    }

    /// Replace the options.
    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the default message for [`ErrorCode::Invalid`] and
    /// [`ErrorCode::InvalidChecksum`].
    pub fn with_message(mut self, message: &'static str) -> Self {
        self.message = message;
        self
    }
}

impl<C: CheckDigit> Field for ChecksumField<C> {
    type Output = String;

    fn options(&self) -> &FieldOptions {
        &self.options
    }

    fn normalize(&self, value: &str) -> String {
        value.chars().filter(|c| *c != ' ' && *c != '-').collect()
    }

    fn convert(&self, value: &str) -> Result<String, ValidationError> {
        let Some(d) = digits(value) else {
            return Err(self.options.error(ErrorCode::Invalid, self.message));
        };
        if !self.lengths.is_empty() && !self.lengths.contains(&d.len()) {
            let allowed = self
                .lengths
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" or ");
            return Err(self.options.error(
                ErrorCode::InvalidLength,
                &format!("Ensure this value has {allowed} digits (it has {}).", d.len()),
            ));
        }
        if !self.scheme.verify(&d) {
            return Err(self.options.error(ErrorCode::InvalidChecksum, self.message));
        }
        Ok(value.to_string())
    }
}
