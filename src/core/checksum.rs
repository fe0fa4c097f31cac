//! Check digit algorithms shared by the country-specific fields.
//!
//! All functions are pure and operate on ASCII input. Anything that is not
//! a digit (or, for MOD 97-10, not alphanumeric) makes the check fail
//! rather than panic.

/// Parse an ASCII digit string into its digit values.
///
/// Returns `None` for empty input or any non-digit character.
pub fn digits(value: &str) -> Option<Vec<u32>> {
    if value.is_empty() {
        return None;
    }
    value
        .chars()
        .map(|c| if c.is_ascii_digit() { c.to_digit(10) } else { None })
        .collect()
}

/// Sum of `digit * weight` over the zipped prefix of both slices.
pub fn weighted_sum(digits: &[u32], weights: &[u32]) -> u32 {
    digits.iter().zip(weights).map(|(d, w)| d * w).sum()
}

/// Modulus 11 check digit for `digits` using `weights`.
///
/// A remainder of 0 yields check digit 0. A computed value of 10 cannot be
/// written as a single digit, so `None` is returned.
pub fn mod11_check_digit(digits: &[u32], weights: &[u32]) -> Option<u32> {
    let remainder = weighted_sum(digits, weights) % 11;
    match remainder {
        0 => Some(0),
        1 => None,
        r => Some(11 - r),
    }
}

fn luhn_sum(digits: &[u32], double_first: bool) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let doubled = (i % 2 == 1) != double_first;
            if doubled {
                let x = d * 2;
                if x > 9 { x - 9 } else { x }
            } else {
                d
            }
        })
        .sum()
}

/// Validate a digit string whose last digit is a Luhn (mod 10) check digit.
pub fn luhn_valid(value: &str) -> bool {
    match digits(value) {
        Some(d) => luhn_sum(&d, false) % 10 == 0,
        None => false,
    }
}

/// Compute the Luhn check digit to append to `payload`.
pub fn luhn_check_digit(payload: &str) -> Option<u32> {
    let d = digits(payload)?;
    Some((10 - luhn_sum(&d, true) % 10) % 10)
}

/// ISO 7064 MOD 97-10 remainder of an alphanumeric string.
///
/// Letters count as two-digit numbers (`A` = 10 … `Z` = 35). The remainder
/// is accumulated per character so arbitrarily long input never overflows.
pub fn mod97_10(value: &str) -> Option<u32> {
    if value.is_empty() {
        return None;
    }
    let mut remainder = 0u32;
    for c in value.chars() {
        let v = c.to_digit(36).filter(|_| c.is_ascii_alphanumeric())?;
        remainder = if v < 10 {
            (remainder * 10 + v) % 97
        } else {
            (remainder * 100 + v) % 97
        };
    }
    Some(remainder)
}

/// ISO 7064 MOD 11,10 check digit for a digit payload.
pub fn iso7064_mod11_10_check_digit(payload: &[u32]) -> u32 {
    let mut product = 10;
    for &d in payload {
        let mut sum = (d + product) % 10;
        if sum == 0 {
            sum = 10;
        }
        product = (sum * 2) % 11;
    }
    (11 - product) % 10
}

/// Validate a digit string whose last digit is an ISO 7064 MOD 11,10 check digit.
pub fn iso7064_mod11_10_valid(value: &str) -> bool {
    match digits(value) {
        Some(d) if d.len() >= 2 => {
            let (payload, check) = d.split_at(d.len() - 1);
            iso7064_mod11_10_check_digit(payload) == check[0]
        }
        _ => false,
    }
}

/// A check digit scheme over a full digit sequence (payload + check digit).
pub trait CheckDigit {
    /// Whether `digits` carries a correct check digit.
    fn verify(&self, digits: &[u32]) -> bool;
}

/// Luhn mod 10.
#[derive(Debug, Clone, Copy, Default)]
pub struct Luhn;

impl CheckDigit for Luhn {
    fn verify(&self, digits: &[u32]) -> bool {
        !digits.is_empty() && luhn_sum(digits, false) % 10 == 0
    }
}

/// Weighted modulus 11 where the last digit is the check digit.
#[derive(Debug, Clone, Copy)]
pub struct Mod11 {
    /// Weights applied to the payload digits, left to right.
    pub weights: &'static [u32],
}

impl CheckDigit for Mod11 {
    fn verify(&self, digits: &[u32]) -> bool {
        if digits.len() != self.weights.len() + 1 {
            return false;
        }
        let (payload, check) = digits.split_at(self.weights.len());
        mod11_check_digit(payload, self.weights) == Some(check[0])
    }
}

/// Weighted modulus 11 where the weighted sum of all digits must be 0 mod 11.
#[derive(Debug, Clone, Copy)]
pub struct Mod11Zero {
    /// One weight per digit, check digit included.
    pub weights: &'static [u32],
}

impl CheckDigit for Mod11Zero {
    fn verify(&self, digits: &[u32]) -> bool {
        digits.len() == self.weights.len() && weighted_sum(digits, self.weights) % 11 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_rejects_non_ascii() {
        assert_eq!(digits("0123"), Some(vec![0, 1, 2, 3]));
        assert_eq!(digits(""), None);
        assert_eq!(digits("12a"), None);
        assert_eq!(digits("١٢٣"), None);
    }

    #[test]
    fn luhn_known_values() {
        assert!(luhn_valid("79927398713"));
        assert!(luhn_valid("4111111111111111"));
        assert!(!luhn_valid("79927398710"));
        assert!(!luhn_valid("4111-1111"));
        assert!(!luhn_valid(""));
    }

    #[test]
    fn luhn_check_digit_completes_payload() {
        assert_eq!(luhn_check_digit("7992739871"), Some(3));
        assert_eq!(luhn_check_digit("411111111111111"), Some(1));
        assert_eq!(luhn_check_digit("x"), None);
    }

    #[test]
    fn mod11_remainder_zero_is_zero() {
        // 5*0 + ... = 0 → remainder 0 → check digit 0
        assert_eq!(mod11_check_digit(&[0; 10], &[5, 4, 3, 2, 7, 6, 5, 4, 3, 2]), Some(0));
    }

    #[test]
    fn mod11_ten_is_unrepresentable() {
        // weighted sum 1 → 11 - 1 = 10
        assert_eq!(mod11_check_digit(&[1], &[1]), None);
    }

    #[test]
    fn mod97_of_iban_is_one() {
        // DE89370400440532013000 rearranged
        assert_eq!(mod97_10("370400440532013000DE89"), Some(1));
        assert_eq!(mod97_10("370400440532013000DE88"), Some(0));
        assert_eq!(mod97_10("12-3"), None);
        assert_eq!(mod97_10(""), None);
    }

    #[test]
    fn iso7064_known_german_vat() {
        assert!(iso7064_mod11_10_valid("136695976"));
        assert!(iso7064_mod11_10_valid("811569869"));
        assert!(!iso7064_mod11_10_valid("123456789"));
        assert!(!iso7064_mod11_10_valid("1"));
    }

    #[test]
    fn scheme_structs() {
        let org = Mod11 {
            weights: &[3, 2, 7, 6, 5, 4, 3, 2],
        };
        assert!(org.verify(&[9, 8, 3, 3, 6, 8, 5, 1, 4]));
        assert!(!org.verify(&[9, 8, 3, 3, 6, 8, 5, 1, 5]));
        assert!(!org.verify(&[9, 8, 3]));

        let dk = Mod11Zero {
            weights: &[2, 7, 6, 5, 4, 3, 2, 1],
        };
        assert!(dk.verify(&[1, 3, 5, 8, 5, 6, 2, 8]));
        assert!(!dk.verify(&[1, 2, 3, 4, 5, 6, 7, 8]));

        assert!(Luhn.verify(&[7, 9, 9, 2, 7, 3, 9, 8, 7, 1, 3]));
        assert!(!Luhn.verify(&[]));
    }
}
