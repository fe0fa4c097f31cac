use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::core::checksum::digits;
use crate::core::{CheckDigit, ErrorCode, Field, FieldOptions, Mod11, ValidationError};

static ORGANISATION_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(NO )?([0-9]{3}) ?([0-9]{3}) ?([0-9]{3})( MVA)?$")
        .expect("organisation number pattern compiles")
});

const CHECK: Mod11 = Mod11 {
    weights: &[3, 2, 7, 6, 5, 4, 3, 2],
};

const INVALID: &str = "Please enter a valid Norwegian organisation number";

/// Norwegian organisation number (organisasjonsnummer).
///
/// Nine digits, the last a modulus 11 check digit. Accepts the VAT
/// registration form `NO 999 999 999 MVA`; digit groups are joined while the
/// `NO ` prefix and ` MVA` suffix are kept as written.
#[derive(Debug, Clone)]
pub struct NoOrganisationNumberField {
    options: FieldOptions,
}

impl NoOrganisationNumberField {
    /// Required field limited to 9..=18 characters.
    pub fn new() -> Self {
        Self {
            options: FieldOptions::new().min_length(9).max_length(18),
        }
    }

    /// Replace the options.
    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }
}

impl Default for NoOrganisationNumberField {
    fn default() -> Self {
        Self::new()
    }
}

fn joined_digits(caps: &Captures<'_>) -> String {
    (2..=4)
        .filter_map(|i| caps.get(i))
        .map(|m| m.as_str())
        .collect()
}

impl Field for NoOrganisationNumberField {
    type Output = String;

    fn options(&self) -> &FieldOptions {
        &self.options
    }

    fn normalize(&self, value: &str) -> String {
        match ORGANISATION_NUMBER.captures(value) {
            Some(caps) => {
                let prefix = caps.get(1).map_or("", |m| m.as_str());
                let suffix = caps.get(5).map_or("", |m| m.as_str());
                format!("{prefix}{}{suffix}", joined_digits(&caps))
            }
            None => value.to_string(),
        }
    }

    fn convert(&self, value: &str) -> Result<String, ValidationError> {
        let number = ORGANISATION_NUMBER
            .captures(value)
            .map(|caps| joined_digits(&caps))
            .ok_or_else(|| self.options.error(ErrorCode::Invalid, INVALID))?;

        match digits(&number) {
            Some(d) if CHECK.verify(&d) => Ok(value.to_string()),
            _ => Err(self.options.error(ErrorCode::Invalid, INVALID)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_grouped() {
        let field = NoOrganisationNumberField::new();
        assert_eq!(field.clean("983368514").unwrap(), Some("983368514".into()));
        assert_eq!(field.clean("983 368 514").unwrap(), Some("983368514".into()));
    }

    #[test]
    fn vat_form_keeps_prefix_and_suffix() {
        let field = NoOrganisationNumberField::new();
        assert_eq!(
            field.clean("NO 923 122 117 MVA").unwrap(),
            Some("NO 923122117 MVA".into())
        );
        assert_eq!(
            field.clean("no 923122117 mva").unwrap(),
            Some("no 923122117 mva".into())
        );
        assert_eq!(field.clean("NO 974524899").unwrap(), Some("NO 974524899".into()));
    }

    #[test]
    fn wrong_check_digit() {
        let field = NoOrganisationNumberField::new();
        let err = field.clean("983368515").unwrap_err();
        assert_eq!(err.code, ErrorCode::Invalid);
        assert_eq!(err.message, INVALID);
    }

    #[test]
    fn shape_and_length() {
        let field = NoOrganisationNumberField::new();
        assert_eq!(field.clean("NO983368514").unwrap_err().code, ErrorCode::Invalid);
        assert_eq!(field.clean("98336851").unwrap_err().code, ErrorCode::MinLength);
        assert_eq!(
            field.clean("NO 983 368 514 MVA 1").unwrap_err().code,
            ErrorCode::MaxLength
        );
    }
}
