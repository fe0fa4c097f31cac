//! IBAN and BIC validation.
//!
//! # Example
//!
//! ```rust
//! use localflavor::iban::*;
//!
//! let iban: Iban = "DE89 3704 0044 0532 0130 00".parse().unwrap();
//! assert_eq!(iban.country_code(), "DE");
//! assert_eq!(iban.as_str(), "DE89370400440532013000");
//!
//! let bic: Bic = "DEUTDEFF".parse().unwrap();
//! assert_eq!(bic.branch_code(), None);
//! ```

mod bic;
#[allow(clippy::module_inception)]
mod iban;
mod registry;

pub use bic::{Bic, BicField};
pub use iban::{Iban, IbanField, IbanOptions};
pub use registry::iban_length;
