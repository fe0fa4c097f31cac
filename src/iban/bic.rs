use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{ErrorCode, Field, FieldOptions, ValidationError, is_known_country_code};

/// A validated Business Identifier Code (SWIFT code), uppercase.
///
/// Deserialization runs the same checks as [`BicField`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Bic(String);

impl Bic {
    /// The code as stored, 8 or 11 characters.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Four letter institution (bank) code.
    pub fn institution_code(&self) -> &str {
        &self.0[..4]
    }

    /// ISO 3166-1 alpha-2 country code.
    pub fn country_code(&self) -> &str {
        &self.0[4..6]
    }

    /// Two character location code.
    pub fn location_code(&self) -> &str {
        &self.0[6..8]
    }

    /// Three character branch code, if present.
    pub fn branch_code(&self) -> Option<&str> {
        (self.0.len() == 11).then(|| &self.0[8..])
    }
}

impl fmt::Display for Bic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Bic {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BicField::new()
            .clean(s)?
            .ok_or_else(|| ValidationError::new(ErrorCode::Required, "This field is required."))
    }
}

impl TryFrom<String> for Bic {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Bic> for String {
    fn from(bic: Bic) -> Self {
        bic.0
    }
}

fn alphanumeric(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Field validating a BIC (ISO 9362).
#[derive(Debug, Clone, Default)]
pub struct BicField {
    options: FieldOptions,
}

impl BicField {
    /// Required BIC field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the options.
    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }
}

impl Field for BicField {
    type Output = Bic;

    fn options(&self) -> &FieldOptions {
        &self.options
    }

    fn normalize(&self, value: &str) -> String {
        value
            .chars()
            .filter(|c| *c != ' ')
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }

    fn convert(&self, value: &str) -> Result<Bic, ValidationError> {
        let chars: Vec<char> = value.chars().collect();
        if !matches!(chars.len(), 8 | 11) {
            return Err(self.options.error(
                ErrorCode::InvalidLength,
                "BIC codes have either 8 or 11 characters.",
            ));
        }
        let part = |range: std::ops::Range<usize>| chars[range].iter().collect::<String>();

        let institution = part(0..4);
        if !institution.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(self.options.error(
                ErrorCode::InvalidInstitution,
                &format!("{institution} is not a valid institution code."),
            ));
        }

        let country = part(4..6);
        if !is_known_country_code(&country) {
            return Err(self.options.error(
                ErrorCode::InvalidCountry,
                &format!("{country} is not a valid country code."),
            ));
        }

        let location = part(6..8);
        if !alphanumeric(&location) {
            return Err(self.options.error(
                ErrorCode::InvalidLocation,
                &format!("{location} is not a valid location code."),
            ));
        }

        let branch = part(8..chars.len());
        if !alphanumeric(&branch) {
            return Err(self.options.error(
                ErrorCode::InvalidBranch,
                &format!("{branch} is not a valid branch code."),
            ));
        }

        Ok(Bic(value.to_string()))
    }
}
