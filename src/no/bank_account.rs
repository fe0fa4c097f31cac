use crate::core::checksum::{digits, mod11_check_digit};
use crate::core::{ErrorCode, Field, FieldOptions, ValidationError};

const WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Norwegian bank account number (kontonummer).
///
/// Always 11 digits: a 10 digit account number followed by a modulus 11
/// check digit. The usual written form is `XXXX.YY.ZZZZZ`; dots and spaces
/// are accepted and removed. Clearing numbers are not checked.
#[derive(Debug, Clone, Default)]
pub struct NoBankAccountNumberField {
    options: FieldOptions,
}

impl NoBankAccountNumberField {
    /// Required bank account field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the options.
    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    /// Render a value in the `XXXX.YY.ZZZZZ` display form.
    ///
    /// Input that does not normalize to 11 digits is returned normalized
    /// but otherwise untouched.
    pub fn prepare_value(&self, value: &str) -> String {
        let value = self.normalize(value.trim());
        if value.len() == 11 && value.bytes().all(|b| b.is_ascii_digit()) {
            format!("{}.{}.{}", &value[..4], &value[4..6], &value[6..])
        } else {
            value
        }
    }
}

impl Field for NoBankAccountNumberField {
    type Output = String;

    fn options(&self) -> &FieldOptions {
        &self.options
    }

    fn normalize(&self, value: &str) -> String {
        value.chars().filter(|c| *c != '.' && *c != ' ').collect()
    }

    fn convert(&self, value: &str) -> Result<String, ValidationError> {
        let Some(d) = digits(value) else {
            return Err(self.options.error(
                ErrorCode::Invalid,
                "Enter a valid Norwegian bank account number.",
            ));
        };
        if d.len() != 11 {
            return Err(self.options.error(
                ErrorCode::InvalidLength,
                "Invalid length. Norwegian bank account numbers are 11 digits long.",
            ));
        }
        if mod11_check_digit(&d[..10], &WEIGHTS) != Some(d[10]) {
            return Err(self.options.error(
                ErrorCode::InvalidChecksum,
                "Invalid control digit. Enter a valid Norwegian bank account number.",
            ));
        }
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_dotted() {
        let field = NoBankAccountNumberField::new();
        assert_eq!(field.clean("86011117947").unwrap(), Some("86011117947".into()));
        assert_eq!(
            field.clean("8601.11.17947").unwrap(),
            Some("86011117947".into())
        );
        assert_eq!(
            field.clean(" 8601 11 17947 ").unwrap(),
            Some("86011117947".into())
        );
    }

    #[test]
    fn remainder_zero_means_check_digit_zero() {
        let field = NoBankAccountNumberField::new();
        assert!(field.is_valid("00000000000"));
        assert!(!field.is_valid("00000000001"));
    }

    #[test]
    fn error_codes() {
        let field = NoBankAccountNumberField::new();
        assert_eq!(
            field.clean("8601111794X").unwrap_err().code,
            ErrorCode::Invalid
        );
        assert_eq!(
            field.clean("8601111794").unwrap_err().code,
            ErrorCode::InvalidLength
        );
        assert_eq!(
            field.clean("86011117948").unwrap_err().code,
            ErrorCode::InvalidChecksum
        );
    }

    #[test]
    fn empty_after_separator_removal() {
        let field = NoBankAccountNumberField::new();
        assert_eq!(field.clean(" . . ").unwrap_err().code, ErrorCode::Required);
        let field = field.with_options(FieldOptions::optional());
        assert_eq!(field.clean("..").unwrap(), None);
    }

    #[test]
    fn display_form() {
        let field = NoBankAccountNumberField::new();
        assert_eq!(field.prepare_value("86011117947"), "8601.11.17947");
        assert_eq!(field.prepare_value("8601 11 17947"), "8601.11.17947");
        assert_eq!(field.prepare_value("1234"), "1234");
    }
}
