use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::registry::iban_length;
use crate::core::checksum::mod97_10;
use crate::core::{ErrorCode, Field, FieldOptions, FlavorError, ValidationError};

/// A validated International Bank Account Number in electronic form
/// (uppercase, no separators).
///
/// `Display` renders the paper form in groups of four. Deserialization runs
/// the same checks as [`IbanField`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iban(String);

impl Iban {
    /// Electronic form, e.g. `NO9386011117947`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ISO 3166-1 alpha-2 country code.
    pub fn country_code(&self) -> &str {
        &self.0[..2]
    }

    /// The two check digits.
    pub fn check_digits(&self) -> &str {
        &self.0[2..4]
    }

    /// Basic Bank Account Number: the national part.
    pub fn bban(&self) -> &str {
        &self.0[4..]
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&group_by_four(&self.0))
    }
}

impl FromStr for Iban {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IbanField::new()
            .clean(s)?
            .ok_or_else(|| ValidationError::new(ErrorCode::Required, "This field is required."))
    }
}

impl TryFrom<String> for Iban {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Iban> for String {
    fn from(iban: Iban) -> Self {
        iban.0
    }
}

fn group_by_four(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    chars
        .chunks(4)
        .map(|c| c.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Expected check digits for `iban` (country code + any check digits + BBAN).
fn expected_check_digits(iban: &str) -> Option<u32> {
    let rearranged = format!("{}{}00", &iban[4..], &iban[..2]);
    mod97_10(&rearranged).map(|r| 98 - r)
}

/// IBAN-specific settings, loadable from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IbanOptions {
    /// Also accept the non-ISO countries published by Nordea.
    pub use_nordea_extensions: bool,
    /// Only accept IBANs from these countries.
    pub include_countries: Option<Vec<String>>,
}

/// Field validating an IBAN: country, length and ISO 7064 MOD 97-10 check
/// digits. Spaces and hyphens are removed and letters uppercased.
#[derive(Debug, Clone, Default)]
pub struct IbanField {
    options: FieldOptions,
    iban: IbanOptions,
}

impl IbanField {
    /// Required IBAN field accepting every ISO registered country.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the options.
    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    /// Apply IBAN-specific settings.
    ///
    /// Country codes are uppercased. Fails if `include_countries` names a
    /// country that has no IBAN format.
    pub fn with_iban_options(mut self, mut iban: IbanOptions) -> Result<Self, FlavorError> {
        let nordea = iban.use_nordea_extensions;
        if let Some(countries) = &mut iban.include_countries {
            for country in countries.iter_mut() {
                country.make_ascii_uppercase();
                if iban_length(country, nordea).is_none() {
                    return Err(FlavorError::Config(format!(
                        "explicitly requested country code {country} is not part of the configured IBAN validation set"
                    )));
                }
            }
        }
        self.iban = iban;
        Ok(self)
    }

    /// Render a value in the grouped paper form.
    pub fn prepare_value(&self, value: &str) -> String {
        group_by_four(&self.normalize(value.trim()))
    }

    fn invalid(&self) -> ValidationError {
        self.options.error(ErrorCode::Invalid, "Not a valid IBAN.")
    }
}

impl Field for IbanField {
    type Output = Iban;

    fn options(&self) -> &FieldOptions {
        &self.options
    }

    fn normalize(&self, value: &str) -> String {
        value
            .chars()
            .filter(|c| *c != ' ' && *c != '-')
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }

    fn convert(&self, value: &str) -> Result<Iban, ValidationError> {
        if !value.bytes().all(|b| b.is_ascii_alphanumeric()) || value.len() < 4 {
            return Err(self.invalid());
        }

        let country = &value[..2];
        match iban_length(country, self.iban.use_nordea_extensions) {
            Some(len) if len != value.len() => {
                return Err(self.options.error(
                    ErrorCode::InvalidLength,
                    &format!("{country} IBANs must contain {len} characters."),
                ));
            }
            Some(_) => {}
            None => {
                return Err(self.options.error(
                    ErrorCode::InvalidCountry,
                    &format!("{country} is not a valid country code for IBAN."),
                ));
            }
        }

        if let Some(allowed) = &self.iban.include_countries {
            if !allowed.iter().any(|c| c == country) {
                return Err(self.options.error(
                    ErrorCode::CountryNotAllowed,
                    &format!("{country} IBANs are not allowed in this field."),
                ));
            }
        }

        let given: Option<u32> = value[2..4].parse().ok();
        if given.is_none() || expected_check_digits(value) != given {
            return Err(self.invalid());
        }

        Ok(Iban(value.to_string()))
    }
}
