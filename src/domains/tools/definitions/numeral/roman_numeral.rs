//! Roman numeral tool definition.
//!
//! Converts in either direction depending on which argument is supplied.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::codec;
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::{ToolError, ToolOutcome};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the Roman numeral tool. Supply exactly one field.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct RomanNumeralParams {
    /// Decimal number to convert to Roman (1-3999)
    #[serde(default)]
    pub number: Option<i64>,

    /// Roman numeral to convert to decimal
    #[serde(default)]
    pub roman: Option<String>,
}

/// The argument combination a caller supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumeralRequest<'a> {
    /// Encode this number.
    Number(i64),
    /// Decode this numeral.
    Roman(&'a str),
    /// Both fields were set.
    Both,
    /// Neither field was set.
    Neither,
}

impl RomanNumeralParams {
    /// Resolve the two optional fields into a single request.
    pub fn request(&self) -> NumeralRequest<'_> {
        match (self.number, self.roman.as_deref()) {
            (Some(_), Some(_)) => NumeralRequest::Both,
            (None, None) => NumeralRequest::Neither,
            (Some(number), None) => NumeralRequest::Number(number),
            (None, Some(roman)) => NumeralRequest::Roman(roman),
        }
    }
}

// ============================================================================
// Output Structure
// ============================================================================

/// Result of a numeral conversion. Exactly one field is set.
#[derive(Debug, Serialize, JsonSchema)]
pub struct RomanNumeralResult {
    /// Roman numeral (when a number was converted)
    #[serde(skip_serializing_if = "Option::is_none")]
    roman: Option<String>,
    /// Decimal value (when a numeral was converted)
    #[serde(skip_serializing_if = "Option::is_none")]
    decimal: Option<i64>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Roman numeral tool - converts between decimal numbers and Roman numerals.
pub struct RomanNumeralTool;

impl RomanNumeralTool {
    fn from_number(number: i64) -> Result<ToolOutcome, ToolError> {
        let roman = match codec::encode(number) {
            Ok(roman) => roman,
            Err(e) => return Ok(ToolOutcome::error(e.to_string())),
        };
        info!("Converted {} to {}", number, roman);

        let result = RomanNumeralResult {
            roman: Some(roman.clone()),
            decimal: None,
        };
        ToolOutcome::success(roman, &result)
    }

    fn from_roman(roman: &str) -> Result<ToolOutcome, ToolError> {
        let decimal = match codec::decode(roman) {
            Ok(decimal) => decimal,
            Err(e) => return Ok(ToolOutcome::error(e.to_string())),
        };
        info!("Converted {} to {}", roman, decimal);

        let result = RomanNumeralResult {
            roman: None,
            decimal: Some(decimal),
        };
        ToolOutcome::success(decimal.to_string(), &result)
    }
}

impl ToolDefinition for RomanNumeralTool {
    const NAME: &'static str = "roman_numeral";

    const DESCRIPTION: &'static str =
        "Convert between decimal numbers (1-3999) and Roman numerals. Provide exactly one of 'number' or 'roman'.";

    type Params = RomanNumeralParams;
    type Output = RomanNumeralResult;

    #[instrument(skip_all, fields(number = ?params.number, roman = ?params.roman))]
    fn execute(params: &RomanNumeralParams) -> Result<ToolOutcome, ToolError> {
        info!("roman_numeral called");

        match params.request() {
            NumeralRequest::Both => Ok(ToolOutcome::error(
                "Please provide either 'number' or 'roman', not both",
            )),
            NumeralRequest::Neither => Ok(ToolOutcome::error(
                "Please provide either 'number' or 'roman'",
            )),
            NumeralRequest::Number(number) => Self::from_number(number),
            NumeralRequest::Roman(roman) => Self::from_roman(roman),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
