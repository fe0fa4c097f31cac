use std::sync::LazyLock;

use regex::Regex;

use crate::core::{Field, FieldOptions, RegexField, ValidationError};

static ZIP_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("zip code pattern compiles"));

/// Norwegian postal code: exactly four digits.
#[derive(Debug, Clone)]
pub struct NoZipCodeField {
    inner: RegexField,
}

impl NoZipCodeField {
    /// Required zip code field.
    pub fn new() -> Self {
        Self {
            inner: RegexField::from_regex(ZIP_CODE.clone())
                .with_message("Enter a zip code in the format XXXX."),
        }
    }

    /// Replace the options.
    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.inner = self.inner.with_options(options);
        self
    }
}

impl Default for NoZipCodeField {
    fn default() -> Self {
        Self::new()
    }
}

impl Field for NoZipCodeField {
    type Output = String;

    fn options(&self) -> &FieldOptions {
        self.inner.options()
    }

    fn convert(&self, value: &str) -> Result<String, ValidationError> {
        self.inner.convert(value)
    }
}
