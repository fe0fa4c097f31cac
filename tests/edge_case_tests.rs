//! Edge cases across fields: whitespace, unicode, options and error rendering.

#![cfg(feature = "all")]

use localflavor::core::*;
use localflavor::iban::{BicField, IbanField};
use localflavor::no::*;
use localflavor::vat::VatIdField;

// ---------------------------------------------------------------------------
// Error rendering (inline snapshots)
// ---------------------------------------------------------------------------

#[test]
fn rendered_errors() {
    insta::assert_snapshot!(
        NoZipCodeField::new().clean("12345").unwrap_err(),
        @"[invalid] Enter a zip code in the format XXXX."
    );
    insta::assert_snapshot!(
        NoBankAccountNumberField::new().clean("86011117948").unwrap_err(),
        @"[invalid_checksum] Invalid control digit. Enter a valid Norwegian bank account number."
    );
    insta::assert_snapshot!(
        IbanField::new().clean("NO93860111179").unwrap_err(),
        @"[invalid_length] NO IBANs must contain 15 characters."
    );
    insta::assert_snapshot!(
        BicField::new().clean("").unwrap_err(),
        @"[required] This field is required."
    );
}

#[test]
fn flavor_error_rendering() {
    let err = FieldOptions::new().min_length(3).max_length(1).validate().unwrap_err();
    insta::assert_snapshot!(err, @"configuration error: min_length 3 exceeds max_length 1");
}

// ---------------------------------------------------------------------------
// Whitespace and unicode
// ---------------------------------------------------------------------------

#[test]
fn unicode_digits_are_not_digits() {
    // Arabic-Indic and fullwidth digits
    assert!(!NoZipCodeField::new().is_valid("٠١٥٠"));
    assert!(!NoBankAccountNumberField::new().is_valid("８６０１１１１７９４７"));
    assert!(!NoSocialSecurityNumberField::new().is_valid("١٥٠٣٨٥٤٥٦٦٠"));
}

#[test]
fn tabs_and_newlines_stripped() {
    assert!(NoZipCodeField::new().is_valid("\t0150\n"));
    assert!(IbanField::new().is_valid("\nNO9386011117947\t"));
}

#[test]
fn whitespace_only_is_empty() {
    let optional = FieldOptions::optional();
    assert_eq!(
        NoSocialSecurityNumberField::new()
            .with_options(optional.clone())
            .clean(" \t ")
            .unwrap(),
        None
    );
    assert_eq!(
        VatIdField::new().with_options(optional).clean("   ").unwrap(),
        None
    );
}

#[test]
fn max_length_counts_characters_not_bytes() {
    let field = RegexField::new(r"^.+$")
        .unwrap()
        .with_options(FieldOptions::new().max_length(3));
    assert!(field.is_valid("æøå"));
    assert_eq!(field.clean("æøåx").unwrap_err().code, ErrorCode::MaxLength);
}

// ---------------------------------------------------------------------------
// Options shared across fields
// ---------------------------------------------------------------------------

#[test]
fn message_override_applies_to_country_fields() {
    let opts = FieldOptions::new().message(ErrorCode::InvalidChecksum, "Sjekk kontonummeret.");
    let field = NoBankAccountNumberField::new().with_options(opts);
    assert_eq!(field.clean("86011117948").unwrap_err().message, "Sjekk kontonummeret.");
    // other codes keep their defaults
    assert_eq!(
        field.clean("8601").unwrap_err().message,
        "Invalid length. Norwegian bank account numbers are 11 digits long."
    );
}

#[test]
fn organisation_options_replace_default_limits() {
    let field = NoOrganisationNumberField::new().with_options(FieldOptions::new());
    // without the 9-character minimum, the shape check reports the error
    assert_eq!(field.clean("1234").unwrap_err().code, ErrorCode::Invalid);
}

#[test]
fn fields_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NoZipCodeField>();
    assert_send_sync::<NoSocialSecurityNumberField>();
    assert_send_sync::<NoBankAccountNumberField>();
    assert_send_sync::<NoPhoneNumberField>();
    assert_send_sync::<NoOrganisationNumberField>();
    assert_send_sync::<IbanField>();
    assert_send_sync::<BicField>();
    assert_send_sync::<VatIdField>();
    assert_send_sync::<ChecksumField<Luhn>>();
}
