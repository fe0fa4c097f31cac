use localflavor::core::Field;
use localflavor::no::*;

fn main() {
    println!("=== Norwegian Social Security Numbers ===\n");

    let ssn = NoSocialSecurityNumberField::new();
    for value in ["15038545660", "15058512343", "01014560013", "31029012302", "1503854566"] {
        match ssn.clean(value) {
            Ok(Some(s)) => println!(
                "  {value} => valid (born {}, {:?})",
                s.birthday.map_or_else(|| "unknown".to_string(), |d| d.to_string()),
                s.gender
            ),
            Ok(None) => println!("  {value} => empty"),
            Err(e) => println!("  {value} => INVALID: {e}"),
        }
    }

    println!("\n=== Bank Account Numbers ===\n");

    let account = NoBankAccountNumberField::new();
    for value in ["86011117947", "8601 11 17947", "86011117948", "8601.11.1794"] {
        match account.clean(value) {
            Ok(_) => println!("  {value} => valid ({})", account.prepare_value(value)),
            Err(e) => println!("  {value} => INVALID: {e}"),
        }
    }

    println!("\n=== Organisation Numbers ===\n");

    let org = NoOrganisationNumberField::new();
    for value in ["983368514", "NO 923 122 117 MVA", "983368515"] {
        match org.clean(value) {
            Ok(Some(cleaned)) => println!("  {value} => valid (cleaned: {cleaned})"),
            Ok(None) => println!("  {value} => empty"),
            Err(e) => println!("  {value} => INVALID: {e}"),
        }
    }

    println!("\n=== Zip Codes and Phone Numbers ===\n");

    let zip = NoZipCodeField::new();
    let phone = NoPhoneNumberField::new();
    for value in ["0150", "150"] {
        println!("  zip {value} => {}", if zip.is_valid(value) { "valid" } else { "INVALID" });
    }
    for value in ["+47 22 33 44 55", "223 34 455", "2233445"] {
        println!("  phone {value} => {}", if phone.is_valid(value) { "valid" } else { "INVALID" });
    }
}
