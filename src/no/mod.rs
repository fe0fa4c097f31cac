//! Norwegian identifiers.
//!
//! # Example
//!
//! ```rust
//! use localflavor::core::Field;
//! use localflavor::no::*;
//!
//! let account = NoBankAccountNumberField::new();
//! assert_eq!(account.clean("8601.11.17947").unwrap().as_deref(), Some("86011117947"));
//!
//! let ssn = NoSocialSecurityNumberField::new().clean("15038545660").unwrap().unwrap();
//! assert_eq!(ssn.gender, Gender::Female);
//! ```

mod bank_account;
mod organisation;
mod phone;
mod social_security;
mod zip_code;

pub use bank_account::NoBankAccountNumberField;
pub use organisation::NoOrganisationNumberField;
pub use phone::NoPhoneNumberField;
pub use social_security::{Gender, NoSocialSecurityNumberField, NorwegianSsn};
pub use zip_code::NoZipCodeField;
