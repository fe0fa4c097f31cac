use crate::core::{ErrorCode, Field, FieldOptions, FlavorError, ValidationError};

use super::format::{VatId, is_vat_country, validate_vat_format};

/// VAT ID as a [`Field`].
///
/// Spaces, dots and hyphens are removed and letters uppercased before
/// [`validate_vat_format`] runs, so `de 136.695.976` is accepted.
#[derive(Debug, Clone, Default)]
pub struct VatIdField {
    options: FieldOptions,
    include_countries: Option<Vec<String>>,
}

impl VatIdField {
    /// Required field accepting every supported country.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the options.
    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    /// Restrict accepted VAT prefixes.
    ///
    /// Fails if a prefix is not supported.
    pub fn include_countries<I, S>(mut self, countries: I) -> Result<Self, FlavorError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let countries: Vec<String> = countries
            .into_iter()
            .map(|c| c.into().to_ascii_uppercase())
            .collect();
        if let Some(bad) = countries.iter().find(|c| !is_vat_country(c)) {
            return Err(FlavorError::Config(format!(
                "{bad} is not a supported VAT country prefix"
            )));
        }
        self.include_countries = Some(countries);
        Ok(self)
    }
}

impl Field for VatIdField {
    type Output = VatId;

    fn options(&self) -> &FieldOptions {
        &self.options
    }

    fn normalize(&self, value: &str) -> String {
        value
            .chars()
            .filter(|c| !matches!(c, ' ' | '.' | '-'))
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }

    fn convert(&self, value: &str) -> Result<VatId, ValidationError> {
        let vat = validate_vat_format(value)
            .map_err(|e| self.options.error(e.code, &e.to_string()))?;

        if let Some(allowed) = &self.include_countries {
            if !allowed.contains(&vat.country_code) {
                return Err(self.options.error(
                    ErrorCode::CountryNotAllowed,
                    &format!("{} VAT IDs are not allowed in this field.", vat.country_code),
                ));
            }
        }
        Ok(vat)
    }
}
