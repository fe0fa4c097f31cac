use std::sync::LazyLock;

use regex::Regex;

use crate::core::{Field, FieldOptions, RegexField, ValidationError};

static PHONE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:\+47)? ?([0-9]{3}\s?[0-9]{2}\s?[0-9]{3}|[0-9]{2}\s?[0-9]{2}\s?[0-9]{2}\s?[0-9]{2})$",
    )
    .expect("phone number pattern compiles")
});

/// Norwegian phone number: eight digits with an optional `+47` prefix.
///
/// Digits may be grouped as `XXX XX XXX` or `XX XX XX XX`. This is a shape
/// check only; use a dedicated phone number library for number plans,
/// formatting and carrier data.
#[derive(Debug, Clone)]
pub struct NoPhoneNumberField {
    inner: RegexField,
}

impl NoPhoneNumberField {
    /// Required phone number field.
    pub fn new() -> Self {
        Self {
            inner: RegexField::from_regex(PHONE_NUMBER.clone())
                .with_message("A phone number must be 8 digits and may have country code"),
        }
    }

    /// Replace the options.
    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.inner = self.inner.with_options(options);
        self
    }
}

impl Default for NoPhoneNumberField {
    fn default() -> Self {
        Self::new()
    }
}

impl Field for NoPhoneNumberField {
    type Output = String;

    fn options(&self) -> &FieldOptions {
        self.inner.options()
    }

    fn convert(&self, value: &str) -> Result<String, ValidationError> {
        self.inner.convert(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_groupings() {
        let field = NoPhoneNumberField::new();
        for ok in [
            "12345678",
            "123 45 678",
            "12 34 56 78",
            "+4712345678",
            "+47 12345678",
            "+47 123 45 678",
        ] {
            assert!(field.is_valid(ok), "{ok} should be valid");
        }
    }

    #[test]
    fn rejected_shapes() {
        let field = NoPhoneNumberField::new();
        for bad in ["1234567", "123456789", "+46 12345678", "12-34-56-78", "+47  12345678"] {
            assert!(!field.is_valid(bad), "{bad} should be invalid");
        }
    }
}
