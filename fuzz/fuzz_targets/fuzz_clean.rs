#![no_main]

use libfuzzer_sys::fuzz_target;
use localflavor::core::Field;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        let _ = localflavor::no::NoZipCodeField::new().clean(s);
        let _ = localflavor::no::NoPhoneNumberField::new().clean(s);
        let _ = localflavor::no::NoSocialSecurityNumberField::new().clean(s);
        let _ = localflavor::no::NoBankAccountNumberField::new().clean(s);
        let _ = localflavor::no::NoOrganisationNumberField::new().clean(s);
        let _ = localflavor::iban::IbanField::new().clean(s);
        let _ = localflavor::iban::BicField::new().clean(s);
        let _ = localflavor::vat::VatIdField::new().clean(s);
        let _ = localflavor::vat::SteuernummerField::new().clean(s);
        let _ = localflavor::vat::validate_steuernummer(s);
    }
});
