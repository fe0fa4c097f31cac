use localflavor::core::Field;
use localflavor::iban::*;
use localflavor::vat::*;

fn main() {
    println!("=== IBAN Validation ===\n");

    let field = IbanField::new();
    for value in [
        "DE89 3704 0044 0532 0130 00",
        "no9386011117947",
        "DE88370400440532013000",
        "US12345678901234",
    ] {
        match field.clean(value) {
            Ok(Some(iban)) => println!(
                "  {value} => valid (country={}, bban={}, print={iban})",
                iban.country_code(),
                iban.bban()
            ),
            Ok(None) => println!("  {value} => empty"),
            Err(e) => println!("  {value} => INVALID: {e}"),
        }
    }

    println!("\n=== BIC Validation ===\n");

    for value in ["DEUTDEFF", "NEDSZAJJXXX", "DEUTXXFF"] {
        match value.parse::<Bic>() {
            Ok(bic) => println!(
                "  {value} => valid (bank={}, branch={})",
                bic.institution_code(),
                bic.branch_code().unwrap_or("-")
            ),
            Err(e) => println!("  {value} => INVALID: {e}"),
        }
    }

    println!("\n=== VAT ID Validation ===\n");

    for value in ["DE136695976", "DE136695975", "NO983368514MVA", "NL123456789B01", "XX999999999"] {
        match validate_vat_format(value) {
            Ok(vat) => println!("  {value} => valid (country={}, number={})", vat.country_code, vat.number),
            Err(e) => println!("  {value} => INVALID: {e}"),
        }
    }
}
