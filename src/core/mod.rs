//! Field abstraction, check digit algorithms and shared errors.
//!
//! Every country module builds on the [`Field`] trait defined here: a raw
//! string goes in, a cleaned value or a [`ValidationError`] comes out.

pub mod checksum;
pub mod countries;
mod error;
mod field;

pub use checksum::{CheckDigit, Luhn, Mod11, Mod11Zero};
pub use countries::is_known_country_code;
pub use error::*;
pub use field::*;
