//! # localflavor
//!
//! Locale-specific identifier validation: postal codes, national identity
//! numbers, bank account numbers, organisation numbers, IBAN/BIC and VAT IDs.
//!
//! Every validator is a [`core::Field`]: raw input goes in, a cleaned value
//! or a [`core::ValidationError`] with a stable [`core::ErrorCode`] comes
//! out. Check digit algorithms live in [`core::checksum`] and are shared by
//! all country modules.
//!
//! ## Quick Start
//!
//! ```rust
//! use localflavor::core::*;
//!
//! // Generic Luhn-guarded number
//! let field = ChecksumField::new(Luhn, &[16]);
//! assert_eq!(
//!     field.clean("4111 1111 1111 1111").unwrap().as_deref(),
//!     Some("4111111111111111"),
//! );
//!
//! let err = field.clean("4111 1111 1111 1112").unwrap_err();
//! assert_eq!(err.code, ErrorCode::InvalidChecksum);
//!
//! // Optional fields clean empty input to `None`
//! let field = field.with_options(FieldOptions::optional());
//! assert_eq!(field.clean("  ").unwrap(), None);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | `Field` trait, options, regex/checksum fields, check digit algorithms |
//! | `no` | Norway: zip code, social security number, bank account, phone, organisation number |
//! | `iban` | IBAN and BIC |
//! | `vat` | EU VAT IDs with check digits, German Steuernummer |
//! | `all` | Everything |
//!
//! ## Logging
//!
//! Rejections are reported as `tracing` events at `debug` level (accepted
//! input at `trace`). Install a subscriber in the application to see them.

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "no")]
pub mod no;

#[cfg(feature = "iban")]
pub mod iban;

#[cfg(feature = "vat")]
pub mod vat;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
