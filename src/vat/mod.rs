//! VAT identification numbers and German tax numbers.
//!
//! Format validation with check digits for DE, AT, BE, DK, FI, IT, PL and
//! NO; the remaining EU prefixes are checked by format only.
//!
//! # Example
//!
//! ```rust
//! use localflavor::vat::*;
//!
//! let vat = validate_vat_format("DE136695976").unwrap();
//! assert_eq!(vat.country_code, "DE");
//! assert!(validate_vat_format("DE136695975").is_err());
//!
//! assert_eq!(validate_steuernummer("11/210/81508").unwrap(), "1121081508");
//! ```

mod field;
mod format;
mod steuernummer;

pub use field::VatIdField;
pub use format::{VatFormatError, VatId, is_vat_country, validate_vat_format};
pub use steuernummer::{SteuernummerField, validate_steuernummer};
