//! Property-based tests for the utility tools
//!
//! These tests verify invariants that must hold for all inputs:
//! - Numeral encoding roundtrips and stays canonical
//! - Parsers never panic
//! - Slugs stay within their character set
//! - Same-unit temperature conversion is exact
//!
//! Run with: cargo test --test property_tests

use proptest::prelude::*;

// ============================================================================
// ROMAN NUMERAL CODEC TESTS
// ============================================================================

mod numeral_tests {
    use super::*;
    use utility_mcp_server::domains::tools::definitions::numeral::{NumeralError, decode, encode};

    proptest! {
        /// Invariant: decode(encode(n)) == n across the whole range
        #[test]
        fn roundtrip(n in 1i64..=3999) {
            let numeral = encode(n).unwrap();
            prop_assert_eq!(decode(&numeral), Ok(n));
        }

        /// Invariant: lowercase input decodes the same as uppercase
        #[test]
        fn case_insensitive(n in 1i64..=3999) {
            let numeral = encode(n).unwrap();
            prop_assert_eq!(decode(&numeral.to_lowercase()), Ok(n));
        }

        /// Invariant: no symbol repeats four times in a row
        #[test]
        fn canonical(n in 1i64..=3999) {
            let numeral = encode(n).unwrap();
            let chars: Vec<char> = numeral.chars().collect();
            prop_assert!(chars.windows(4).all(|w| !(w[0] == w[1] && w[1] == w[2] && w[2] == w[3])));
        }

        /// Invariant: everything outside 1..=3999 is rejected
        #[test]
        fn out_of_range_rejected(n in prop_oneof![i64::MIN..1i64, 4000i64..i64::MAX]) {
            prop_assert_eq!(encode(n), Err(NumeralError::OutOfRange(n)));
        }

        /// Invariant: decode never panics on any string input
        #[test]
        fn decode_never_panics(s in "\\PC{0,40}") {
            let _ = decode(&s);
        }

        /// Invariant: strings over the numeral alphabet always decode
        #[test]
        fn relaxed_alphabet_decodes(s in "[IVXLCDMivxlcdm]{1,20}") {
            prop_assert!(decode(&s).is_ok());
        }
    }
}

// ============================================================================
// SLUGIFY TESTS
// ============================================================================

mod slug_tests {
    use super::*;
    use utility_mcp_server::domains::tools::definitions::text::slugify::slugify;

    proptest! {
        /// Invariant: slugs only contain [a-z0-9-] and never start or end with '-'
        #[test]
        fn output_charset(s in "\\PC{0,100}") {
            let slug = slugify(&s);
            prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!slug.starts_with('-'));
            prop_assert!(!slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
        }

        /// Invariant: slugify is idempotent
        #[test]
        fn idempotent(s in "\\PC{0,100}") {
            let once = slugify(&s);
            prop_assert_eq!(slugify(&once), once.clone());
        }
    }
}

// ============================================================================
// WORD COUNT TESTS
// ============================================================================

mod word_count_tests {
    use super::*;
    use utility_mcp_server::domains::tools::definitions::text::word_count::TextStats;

    proptest! {
        /// Invariant: counts are mutually consistent
        #[test]
        fn bounded(s in "\\PC{0,200}") {
            let stats = TextStats::of(&s);
            prop_assert!(stats.characters_no_whitespace <= stats.characters);
            prop_assert!(stats.words <= stats.characters);
            prop_assert_eq!(stats.lines == 0, s.is_empty());
        }
    }
}

// ============================================================================
// TEMPERATURE TESTS
// ============================================================================

mod temperature_tests {
    use super::*;
    use utility_mcp_server::domains::tools::definitions::temperature::TemperatureUnit;

    fn unit() -> impl Strategy<Value = TemperatureUnit> {
        prop_oneof![
            Just(TemperatureUnit::Celsius),
            Just(TemperatureUnit::Fahrenheit),
            Just(TemperatureUnit::Kelvin),
        ]
    }

    proptest! {
        /// Invariant: converting to the same unit returns the input bit for bit
        #[test]
        fn identity_exact(value in proptest::num::f64::NORMAL, u in unit()) {
            prop_assert_eq!(u.convert(value, u).to_bits(), value.to_bits());
        }

        /// Invariant: converting there and back lands close to the start
        #[test]
        fn roundtrip_close(value in -1.0e6f64..1.0e6, from in unit(), to in unit()) {
            let back = to.convert(from.convert(value, to), from);
            prop_assert!((back - value).abs() < 1e-6);
        }
    }
}
