//! IBAN lengths per country.

/// ISO 13616 registered countries and their total IBAN length. Sorted.
static IBAN_LENGTHS: &[(&str, usize)] = &[
    ("AD", 24), ("AE", 23), ("AL", 28), ("AT", 20), ("AZ", 28), ("BA", 20), ("BE", 16),
    ("BG", 22), ("BH", 22), ("BI", 27), ("BR", 29), ("BY", 28), ("CH", 21), ("CR", 22),
    ("CY", 28), ("CZ", 24), ("DE", 22), ("DJ", 27), ("DK", 18), ("DO", 28), ("EE", 20),
    ("EG", 29), ("ES", 24), ("FI", 18), ("FK", 18), ("FO", 18), ("FR", 27), ("GB", 22),
    ("GE", 22), ("GI", 23), ("GL", 18), ("GR", 27), ("GT", 28), ("HR", 21), ("HU", 28),
    ("IE", 22), ("IL", 23), ("IQ", 23), ("IS", 26), ("IT", 27), ("JO", 30), ("KW", 30),
    ("KZ", 20), ("LB", 28), ("LC", 32), ("LI", 21), ("LT", 20), ("LU", 20), ("LV", 21),
    ("LY", 25), ("MC", 27), ("MD", 24), ("ME", 22), ("MK", 19), ("MN", 20), ("MR", 27),
    ("MT", 31), ("MU", 30), ("NI", 28), ("NL", 18), ("NO", 15), ("OM", 23), ("PK", 24),
    ("PL", 28), ("PS", 29), ("PT", 25), ("QA", 29), ("RO", 24), ("RS", 22), ("RU", 33),
    ("SA", 24), ("SC", 31), ("SD", 18), ("SE", 24), ("SI", 19), ("SK", 24), ("SM", 27),
    ("SO", 23), ("ST", 25), ("SV", 28), ("TL", 23), ("TN", 24), ("TR", 26), ("UA", 29),
    ("VA", 22), ("VG", 24), ("XK", 20), ("YE", 30),
];

/// Countries outside the ISO registry whose IBAN formats Nordea publishes.
/// Countries that have since joined the registry are only listed above.
/// Sorted.
static NORDEA_EXTENSIONS: &[(&str, usize)] = &[
    ("AO", 25), ("BF", 28), ("BJ", 28), ("CF", 27), ("CG", 27), ("CI", 28),
    ("CM", 27), ("CV", 25), ("DZ", 24), ("GA", 27), ("GQ", 27), ("GW", 25),
    ("HN", 28), ("IR", 26), ("KM", 27), ("MA", 28), ("MG", 27), ("ML", 28),
    ("MZ", 25), ("NE", 28), ("SN", 28), ("TD", 27), ("TG", 28),
];

fn lookup(table: &[(&str, usize)], country: &str) -> Option<usize> {
    table
        .binary_search_by(|(code, _)| code.cmp(&country))
        .ok()
        .map(|i| table[i].1)
}

/// Total IBAN length for `country` (uppercase ISO alpha-2).
///
/// With `nordea_extensions`, countries outside the ISO registry are
/// included as well.
pub fn iban_length(country: &str, nordea_extensions: bool) -> Option<usize> {
    lookup(IBAN_LENGTHS, country).or_else(|| {
        if nordea_extensions {
            lookup(NORDEA_EXTENSIONS, country)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_sorted_and_disjoint() {
        assert!(IBAN_LENGTHS.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(NORDEA_EXTENSIONS.windows(2).all(|w| w[0].0 < w[1].0));
        for (code, _) in NORDEA_EXTENSIONS {
            assert!(lookup(IBAN_LENGTHS, code).is_none(), "{code} in both tables");
        }
    }

    #[test]
    fn lengths() {
        assert_eq!(iban_length("NO", false), Some(15));
        assert_eq!(iban_length("DE", false), Some(22));
        assert_eq!(iban_length("LC", false), Some(32));
        assert_eq!(iban_length("RU", false), Some(33));
        assert_eq!(iban_length("YE", false), Some(30));
        assert_eq!(iban_length("FK", false), Some(18));
        assert_eq!(iban_length("HN", false), None);
        assert_eq!(iban_length("HN", true), Some(28));
        assert_eq!(iban_length("CG", true), Some(27));
        assert_eq!(iban_length("DZ", false), None);
        assert_eq!(iban_length("DZ", true), Some(24));
        assert_eq!(iban_length("US", true), None);
    }
}
