//! Roman numeral codec.
//!
//! Encoding always yields the canonical subtractive form. Decoding is
//! relaxed: any string over `IVXLCDM` (any case) decodes, including
//! non-canonical spellings such as `IIII` or `VX`. Only foreign characters
//! are rejected.

use thiserror::Error;

/// Smallest encodable value.
pub const MIN_VALUE: i64 = 1;

/// Largest encodable value.
pub const MAX_VALUE: i64 = 3999;

/// Value/symbol pairs in strictly descending order, subtractive forms included.
const NUMERALS: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Errors raised by the numeral codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    /// The number cannot be written with classical numerals.
    #[error("Number must be between 1 and 3999")]
    OutOfRange(i64),

    /// Nothing to decode.
    #[error("Roman numeral must not be empty")]
    Empty,

    /// A character outside `IVXLCDM`.
    #[error("invalid Roman numeral character: {0}")]
    InvalidCharacter(char),
}

/// Value of a single (uppercase) numeral symbol.
fn symbol_value(symbol: char) -> Option<i64> {
    match symbol {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Encode `n` as a canonical Roman numeral.
pub fn encode(n: i64) -> Result<String, NumeralError> {
    if !(MIN_VALUE..=MAX_VALUE).contains(&n) {
        return Err(NumeralError::OutOfRange(n));
    }

    let mut remaining = n;
    let mut numeral = String::new();
    for (value, symbol) in NUMERALS {
        while remaining >= value {
            numeral.push_str(symbol);
            remaining -= value;
        }
    }

    debug_assert_eq!(remaining, 0);
    Ok(numeral)
}

/// Decode a Roman numeral, case-insensitively.
///
/// Scans right to left: a symbol smaller than the one after it is
/// subtracted, anything else is added.
pub fn decode(numeral: &str) -> Result<i64, NumeralError> {
    if numeral.is_empty() {
        return Err(NumeralError::Empty);
    }

    let mut total = 0;
    let mut previous = 0;
    for symbol in numeral.chars().rev() {
        let value = symbol_value(symbol.to_ascii_uppercase())
            .ok_or(NumeralError::InvalidCharacter(symbol))?;
        if value < previous {
            total -= value;
        } else {
            total += value;
        }
        previous = value;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_examples() {
        assert_eq!(encode(1).unwrap(), "I");
        assert_eq!(encode(3).unwrap(), "III");
        assert_eq!(encode(4).unwrap(), "IV");
        assert_eq!(encode(9).unwrap(), "IX");
        assert_eq!(encode(14).unwrap(), "XIV");
        assert_eq!(encode(40).unwrap(), "XL");
        assert_eq!(encode(444).unwrap(), "CDXLIV");
        assert_eq!(encode(1994).unwrap(), "MCMXCIV");
        assert_eq!(encode(2024).unwrap(), "MMXXIV");
        assert_eq!(encode(3999).unwrap(), "MMMCMXCIX");
    }

    #[test]
    fn test_encode_out_of_range() {
        assert_eq!(encode(0), Err(NumeralError::OutOfRange(0)));
        assert_eq!(encode(4000), Err(NumeralError::OutOfRange(4000)));
        assert_eq!(encode(-7), Err(NumeralError::OutOfRange(-7)));
        assert_eq!(
            encode(4000).unwrap_err().to_string(),
            "Number must be between 1 and 3999"
        );
    }

    #[test]
    fn test_roundtrip_full_range() {
        for n in MIN_VALUE..=MAX_VALUE {
            let numeral = encode(n).unwrap();
            assert_eq!(decode(&numeral).unwrap(), n, "roundtrip failed for {}", numeral);
        }
    }

    #[test]
    fn test_encode_is_canonical() {
        for n in MIN_VALUE..=MAX_VALUE {
            let numeral = encode(n).unwrap();
            for run in ["IIII", "XXXX", "CCCC", "MMMM", "VV", "LL", "DD"] {
                assert!(!numeral.contains(run), "{} -> {} contains {}", n, numeral, run);
            }
        }
    }

    #[test]
    fn test_decode_case_insensitive() {
        assert_eq!(decode("mmxxiv").unwrap(), 2024);
        assert_eq!(decode("McMxCiV").unwrap(), 1994);
    }

    #[test]
    fn test_decode_invalid_character() {
        assert_eq!(decode("X@"), Err(NumeralError::InvalidCharacter('@')));
        assert_eq!(decode("XIé"), Err(NumeralError::InvalidCharacter('é')));
        assert_eq!(
            decode("X@").unwrap_err().to_string(),
            "invalid Roman numeral character: @"
        );
    }

    #[test]
    fn test_decode_reports_offending_character_in_original_case() {
        assert_eq!(decode("xiz"), Err(NumeralError::InvalidCharacter('z')));
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(""), Err(NumeralError::Empty));
    }

    #[test]
    fn test_decode_accepts_non_canonical() {
        assert_eq!(decode("IIII").unwrap(), 4);
        assert_eq!(decode("VX").unwrap(), 5);
        assert_eq!(decode("IM").unwrap(), 999);
        assert_eq!(decode("MMMM").unwrap(), 4000);
    }
}
