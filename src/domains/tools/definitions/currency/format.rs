//! Format currency tool definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::table::CurrencySpec;
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::{ToolError, ToolOutcome};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the format currency tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FormatCurrencyParams {
    /// The numeric amount to format
    pub amount: f64,

    /// Currency code (USD, EUR, GBP, JPY)
    pub currency: String,
}

// ============================================================================
// Output Structure
// ============================================================================

/// Formatted amount.
#[derive(Debug, Serialize, JsonSchema)]
pub struct FormattedCurrency {
    /// Symbol followed by the rounded amount, e.g. "$1234.56"
    formatted: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Format currency tool - renders an amount with symbol and fixed decimals.
pub struct FormatCurrencyTool;

impl ToolDefinition for FormatCurrencyTool {
    const NAME: &'static str = "format_currency";

    const DESCRIPTION: &'static str =
        "Format a number as currency with proper symbol and decimal places";

    type Params = FormatCurrencyParams;
    type Output = FormattedCurrency;

    #[instrument(skip_all, fields(currency = %params.currency))]
    fn execute(params: &FormatCurrencyParams) -> Result<ToolOutcome, ToolError> {
        info!(
            "format_currency called: {:.2} {}",
            params.amount, params.currency
        );

        let Some(spec) = CurrencySpec::lookup(&params.currency) else {
            return Ok(ToolOutcome::error(format!(
                "Unsupported currency: {}",
                params.currency
            )));
        };

        if !params.amount.is_finite() {
            return Ok(ToolOutcome::error("Amount must be a finite number"));
        }

        let formatted = spec.format(params.amount);
        ToolOutcome::success(formatted.clone(), &FormattedCurrency { formatted })
    }
}

// ============================================================================
// Tests
// ============================================================================
