//! Temperature convert tool definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::unit::TemperatureUnit;
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::{ToolError, ToolOutcome};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the temperature convert tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TemperatureConvertParams {
    /// The temperature value to convert
    pub value: f64,

    /// Source temperature unit (celsius, fahrenheit, or kelvin)
    pub from_unit: String,

    /// Target temperature unit (celsius, fahrenheit, or kelvin)
    pub to_unit: String,
}

// ============================================================================
// Output Structure
// ============================================================================

/// Converted temperature.
#[derive(Debug, Serialize, JsonSchema)]
pub struct TemperatureResult {
    /// Value in the target unit, unrounded
    result: f64,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Temperature convert tool - converts between celsius, fahrenheit and kelvin.
///
/// Both unit names are parsed (trimmed, case-insensitive) before the
/// same-unit shortcut, so `"Celsius"` is accepted and an unknown unit is an
/// error even when `from_unit` equals `to_unit`.
pub struct TemperatureConvertTool;

impl ToolDefinition for TemperatureConvertTool {
    const NAME: &'static str = "temperature_convert";

    const DESCRIPTION: &'static str =
        "Convert temperatures between Celsius, Fahrenheit, and Kelvin";

    type Params = TemperatureConvertParams;
    type Output = TemperatureResult;

    #[instrument(skip_all, fields(from = %params.from_unit, to = %params.to_unit))]
    fn execute(params: &TemperatureConvertParams) -> Result<ToolOutcome, ToolError> {
        info!(
            "temperature_convert called: {:.2} {} to {}",
            params.value, params.from_unit, params.to_unit
        );

        let from = match params.from_unit.parse::<TemperatureUnit>() {
            Ok(unit) => unit,
            Err(e) => return Ok(ToolOutcome::error(e.to_string())),
        };
        let to = match params.to_unit.parse::<TemperatureUnit>() {
            Ok(unit) => unit,
            Err(e) => return Ok(ToolOutcome::error(e.to_string())),
        };

        let result = from.convert(params.value, to);
        if !result.is_finite() {
            return Ok(ToolOutcome::error(
                "Temperature conversion resulted in invalid value",
            ));
        }

        ToolOutcome::success(format!("{:.2}", result), &TemperatureResult { result })
    }
}

// ============================================================================
// Tests
// ============================================================================
