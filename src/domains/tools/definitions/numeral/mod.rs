//! Roman numeral conversion: the codec and the tool exposing it.

pub mod codec;
pub mod roman_numeral;

pub use codec::{NumeralError, decode, encode};
pub use roman_numeral::{RomanNumeralParams, RomanNumeralTool};
