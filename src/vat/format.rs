//! EU VAT identification number validation (format and check digits).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::checksum::{digits, iso7064_mod11_10_valid, luhn_valid, weighted_sum};
use crate::core::countries::split_country_prefix;
use crate::core::{CheckDigit, ErrorCode, Mod11, Mod11Zero};

/// Error returned when a VAT ID fails validation.
#[derive(Debug, Clone)]
pub struct VatFormatError {
    /// The invalid input value.
    pub value: String,
    /// Why the value failed validation.
    pub reason: String,
    /// Machine-readable category of the failure.
    pub code: ErrorCode,
}

impl fmt::Display for VatFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid VAT ID '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for VatFormatError {}

impl VatFormatError {
    fn new(value: &str, code: ErrorCode, reason: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            reason: reason.into(),
            code,
        }
    }
}

/// A VAT ID split into its country prefix and national number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VatId {
    /// Uppercase VAT country prefix (`EL` for Greece, `XI` for Northern Ireland).
    pub country_code: String,
    /// National part after the prefix.
    pub number: String,
}

impl fmt::Display for VatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.country_code, self.number)
    }
}

struct VatFormat {
    country: &'static str,
    shape: fn(&str) -> bool,
    check: Option<fn(&str) -> bool>,
}

fn numeric(n: &str, lengths: &[usize]) -> bool {
    lengths.contains(&n.len()) && n.bytes().all(|b| b.is_ascii_digit())
}

fn alnum(n: &str, lengths: &[usize]) -> bool {
    lengths.contains(&n.len()) && n.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn verify(n: &str, scheme: impl CheckDigit) -> bool {
    digits(n).is_some_and(|d| scheme.verify(&d))
}

fn at_check(n: &str) -> bool {
    // "U" followed by 7 payload digits and a check digit
    let Some(d) = digits(&n[1..]) else {
        return false;
    };
    let sum: u32 = d[..7]
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let p = if i % 2 == 0 { x } else { x * 2 };
            p / 10 + p % 10
        })
        .sum();
    (10 - (sum + 4) % 10) % 10 == d[7]
}

fn be_check(n: &str) -> bool {
    match (n[..8].parse::<u32>(), n[8..].parse::<u32>()) {
        (Ok(base), Ok(check)) => 97 - base % 97 == check,
        _ => false,
    }
}

fn dk_check(n: &str) -> bool {
    verify(
        n,
        Mod11Zero {
            weights: &[2, 7, 6, 5, 4, 3, 2, 1],
        },
    )
}

fn fi_check(n: &str) -> bool {
    verify(
        n,
        Mod11 {
            weights: &[7, 9, 10, 5, 8, 4, 2],
        },
    )
}

fn pl_check(n: &str) -> bool {
    let Some(d) = digits(n) else {
        return false;
    };
    let r = weighted_sum(&d[..9], &[6, 5, 7, 2, 3, 4, 5, 6, 7]) % 11;
    r != 10 && r == d[9]
}

fn no_check(n: &str) -> bool {
    verify(
        &n[..9],
        Mod11 {
            weights: &[3, 2, 7, 6, 5, 4, 3, 2],
        },
    )
}

/// Sorted by country prefix.
static VAT_FORMATS: &[VatFormat] = &[
    VatFormat {
        country: "AT",
        shape: |n| n.len() == 9 && n.starts_with('U') && numeric(&n[1..], &[8]),
        check: Some(at_check),
    },
    VatFormat {
        country: "BE",
        shape: |n| numeric(n, &[10]) && matches!(n.as_bytes()[0], b'0' | b'1'),
        check: Some(be_check),
    },
    VatFormat {
        country: "BG",
        shape: |n| numeric(n, &[9, 10]),
        check: None,
    },
    VatFormat {
        country: "CY",
        shape: |n| n.len() == 9 && numeric(&n[..8], &[8]) && n.as_bytes()[8].is_ascii_alphabetic(),
        check: None,
    },
    VatFormat {
        country: "CZ",
        shape: |n| numeric(n, &[8, 9, 10]),
        check: None,
    },
    VatFormat {
        country: "DE",
        shape: |n| numeric(n, &[9]) && !n.starts_with('0'),
        check: Some(iso7064_mod11_10_valid),
    },
    VatFormat {
        country: "DK",
        shape: |n| numeric(n, &[8]),
        check: Some(dk_check),
    },
    VatFormat {
        country: "EE",
        shape: |n| numeric(n, &[9]),
        check: None,
    },
    VatFormat {
        country: "EL",
        shape: |n| numeric(n, &[9]),
        check: None,
    },
    VatFormat {
        country: "ES",
        shape: |n| alnum(n, &[9]),
        check: None,
    },
    VatFormat {
        country: "FI",
        shape: |n| numeric(n, &[8]),
        check: Some(fi_check),
    },
    VatFormat {
        country: "FR",
        shape: |n| n.len() == 11 && alnum(&n[..2], &[2]) && numeric(&n[2..], &[9]),
        check: None,
    },
    VatFormat {
        country: "HR",
        shape: |n| numeric(n, &[11]),
        check: None,
    },
    VatFormat {
        country: "HU",
        shape: |n| numeric(n, &[8]),
        check: None,
    },
    VatFormat {
        country: "IE",
        shape: |n| alnum(n, &[8, 9]),
        check: None,
    },
    VatFormat {
        country: "IT",
        shape: |n| numeric(n, &[11]),
        check: Some(luhn_valid),
    },
    VatFormat {
        country: "LT",
        shape: |n| numeric(n, &[9, 12]),
        check: None,
    },
    VatFormat {
        country: "LU",
        shape: |n| numeric(n, &[8]),
        check: None,
    },
    VatFormat {
        country: "LV",
        shape: |n| numeric(n, &[11]),
        check: None,
    },
    VatFormat {
        country: "MT",
        shape: |n| numeric(n, &[8]),
        check: None,
    },
    VatFormat {
        country: "NL",
        shape: |n| {
            n.len() == 12 && numeric(&n[..9], &[9]) && n.as_bytes()[9] == b'B' && numeric(&n[10..], &[2])
        },
        check: None,
    },
    VatFormat {
        country: "NO",
        shape: |n| n.len() == 12 && numeric(&n[..9], &[9]) && &n[9..] == "MVA",
        check: Some(no_check),
    },
    VatFormat {
        country: "PL",
        shape: |n| numeric(n, &[10]),
        check: Some(pl_check),
    },
    VatFormat {
        country: "PT",
        shape: |n| numeric(n, &[9]),
        check: None,
    },
    VatFormat {
        country: "RO",
        shape: |n| numeric(n, &[2, 3, 4, 5, 6, 7, 8, 9, 10]),
        check: None,
    },
    VatFormat {
        country: "SE",
        shape: |n| numeric(n, &[12]),
        check: None,
    },
    VatFormat {
        country: "SI",
        shape: |n| numeric(n, &[8]),
        check: None,
    },
    VatFormat {
        country: "SK",
        shape: |n| numeric(n, &[10]),
        check: None,
    },
    VatFormat {
        country: "XI",
        shape: |n| numeric(n, &[9]),
        check: None,
    },
];

/// Whether `country` is a VAT prefix known to [`validate_vat_format`].
pub fn is_vat_country(country: &str) -> bool {
    VAT_FORMATS
        .binary_search_by(|f| f.country.cmp(country))
        .is_ok()
}

/// Validate a VAT ID by format and, where the national scheme is
/// implemented, by check digit. No network call is made.
///
/// The input must include the 2-letter country prefix (e.g. "DE136695976");
/// surrounding whitespace is ignored and the prefix is case-insensitive.
pub fn validate_vat_format(vat_id: &str) -> Result<VatId, VatFormatError> {
    let vat_id = vat_id.trim();
    if vat_id.len() < 4 {
        return Err(VatFormatError::new(
            vat_id,
            ErrorCode::Invalid,
            "too short, must be at least 4 characters",
        ));
    }

    let Some((country, number)) = split_country_prefix(vat_id) else {
        return Err(VatFormatError::new(
            vat_id,
            ErrorCode::InvalidCountry,
            "must start with a 2-letter country code",
        ));
    };
    let country = country.to_ascii_uppercase();

    let Ok(idx) = VAT_FORMATS.binary_search_by(|f| f.country.cmp(country.as_str())) else {
        return Err(VatFormatError::new(
            vat_id,
            ErrorCode::InvalidCountry,
            format!("unknown country code '{country}'"),
        ));
    };
    let format = &VAT_FORMATS[idx];

    if !number.is_ascii() || !(format.shape)(number) {
        return Err(VatFormatError::new(
            vat_id,
            ErrorCode::Invalid,
            format!("invalid format for country {country}"),
        ));
    }

    if let Some(check) = format.check {
        if !check(number) {
            return Err(VatFormatError::new(
                vat_id,
                ErrorCode::InvalidChecksum,
                format!("check digit mismatch for country {country}"),
            ));
        }
    }

    Ok(VatId {
        country_code: country,
        number: number.to_string(),
    })
}
