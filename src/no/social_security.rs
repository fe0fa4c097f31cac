//! Norwegian national identity number (fødselsnummer).
//!
//! Eleven digits: `DDMMYY` birth date, a three digit individual number whose
//! range encodes the century and whose last digit encodes gender, then two
//! modulus 11 control digits.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::checksum::{Mod11Zero, digits};
use crate::core::{CheckDigit, ErrorCode, Field, FieldOptions, ValidationError};

const INVALID: &str = "Enter a valid Norwegian social security number.";

/// Weights for the first control sum (includes the first control digit).
const CONTROL_1: Mod11Zero = Mod11Zero {
    weights: &[3, 7, 6, 1, 8, 9, 4, 5, 2, 1, 0],
};

/// Weights for the second control sum (includes both control digits).
const CONTROL_2: Mod11Zero = Mod11Zero {
    weights: &[5, 4, 3, 2, 7, 6, 5, 4, 3, 2, 1],
};

/// Gender encoded in the individual number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// Even third individual digit.
    Female,
    /// Odd third individual digit.
    Male,
}

/// A validated Norwegian social security number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NorwegianSsn {
    /// The eleven digits as entered.
    pub number: String,
    /// Date of birth, when the individual number range determines a century.
    pub birthday: Option<NaiveDate>,
    /// Gender derived from the ninth digit.
    pub gender: Gender,
}

/// Field validating a Norwegian social security number.
#[derive(Debug, Clone, Default)]
pub struct NoSocialSecurityNumberField {
    options: FieldOptions,
}

impl NoSocialSecurityNumberField {
    /// Required SSN field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the options.
    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    fn invalid(&self) -> ValidationError {
        self.options.error(ErrorCode::Invalid, INVALID)
    }
}

/// Resolve the birth date from the first nine digits.
///
/// `Ok(None)` means no century rule applies; `Err(())` means the digits
/// name a date that does not exist.
fn birthday(d: &[u32]) -> Result<Option<NaiveDate>, ()> {
    let day = d[0] * 10 + d[1];
    let month = d[2] * 10 + d[3];
    let year2 = (d[4] * 10 + d[5]) as i32;
    let individual = d[6] * 100 + d[7] * 10 + d[8];

    let year = match individual {
        0..500 => Some(1900 + year2),
        500..750 if year2 > 54 => Some(1800 + year2),
        500..1000 if year2 < 40 => Some(2000 + year2),
        900..1000 if year2 > 39 => Some(1900 + year2),
        _ => None,
    };

    match year {
        Some(year) => NaiveDate::from_ymd_opt(year, month, day).map(Some).ok_or(()),
        None => Ok(None),
    }
}

impl Field for NoSocialSecurityNumberField {
    type Output = NorwegianSsn;

    fn options(&self) -> &FieldOptions {
        &self.options
    }

    fn convert(&self, value: &str) -> Result<NorwegianSsn, ValidationError> {
        let d = match digits(value) {
            Some(d) if d.len() == 11 => d,
            _ => return Err(self.invalid()),
        };

        let birthday = birthday(&d).map_err(|()| self.invalid())?;
        let gender = if d[8] % 2 == 0 {
            Gender::Female
        } else {
            Gender::Male
        };

        if !CONTROL_1.verify(&d) || !CONTROL_2.verify(&d) {
            return Err(self.invalid());
        }

        Ok(NorwegianSsn {
            number: value.to_string(),
            birthday,
            gender,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn clean(value: &str) -> Result<NorwegianSsn, ValidationError> {
        NoSocialSecurityNumberField::new()
            .clean(value)
            .map(|v| v.unwrap())
    }

    #[test]
    fn twentieth_century_female() {
        let ssn = clean("15038545660").unwrap();
        assert_eq!(ssn.birthday, Some(date(1985, 3, 15)));
        assert_eq!(ssn.gender, Gender::Female);
    }

    #[test]
    fn twentieth_century_male() {
        let ssn = clean("15058512343").unwrap();
        assert_eq!(ssn.birthday, Some(date(1985, 5, 15)));
        assert_eq!(ssn.gender, Gender::Male);
    }

    #[test]
    fn century_ranges() {
        // 500-749 with year > 54 → 1800s
        assert_eq!(clean("01016070048").unwrap().birthday, Some(date(1860, 1, 1)));
        // 500-999 with year < 40 → 2000s, leap day
        assert_eq!(clean("29020050088").unwrap().birthday, Some(date(2000, 2, 29)));
        // 900-999 with year > 39 → 1900s
        assert_eq!(clean("31129990158").unwrap().birthday, Some(date(1999, 12, 31)));
    }

    #[test]
    fn unmapped_range_has_no_birthday() {
        // individual number 600 with year 45 matches no century rule
        let ssn = clean("01014560013").unwrap();
        assert_eq!(ssn.birthday, None);
    }

    #[test]
    fn impossible_date_rejected() {
        // control digits are correct for 31 February
        assert_eq!(clean("31029012302").unwrap_err().code, ErrorCode::Invalid);
    }

    #[test]
    fn control_digit_errors() {
        assert!(clean("15038545661").is_err());
        assert!(clean("15038545600").is_err());
        // transposed birth date digits
        assert!(clean("51038545660").is_err());
    }

    #[test]
    fn shape_errors() {
        assert!(clean("1503854566").is_err());
        assert!(clean("150385456600").is_err());
        assert!(clean("150385-45660").is_err());
    }
}
