//! Supported currencies.

/// Display rules for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencySpec {
    /// ISO 4217 code.
    pub code: &'static str,
    /// Symbol prefixed to the amount.
    pub symbol: &'static str,
    /// Digits after the decimal point.
    pub decimals: u32,
}

const CURRENCIES: [CurrencySpec; 4] = [
    CurrencySpec {
        code: "USD",
        symbol: "$",
        decimals: 2,
    },
    CurrencySpec {
        code: "EUR",
        symbol: "€",
        decimals: 2,
    },
    CurrencySpec {
        code: "GBP",
        symbol: "£",
        decimals: 2,
    },
    CurrencySpec {
        code: "JPY",
        symbol: "¥",
        decimals: 0,
    },
];

impl CurrencySpec {
    /// Find a currency by its exact (uppercase) code.
    pub fn lookup(code: &str) -> Option<&'static CurrencySpec> {
        CURRENCIES.iter().find(|spec| spec.code == code)
    }

    /// Render `amount` with this currency's symbol and precision.
    ///
    /// Rounds to nearest, ties away from zero, at the currency's precision.
    /// No thousands separators. A value that rounds to zero prints unsigned.
    /// Amounts too large to scale are already integral and print as given.
    pub fn format(&self, amount: f64) -> String {
        let scale = 10f64.powi(self.decimals as i32);
        let scaled = amount * scale;
        let mut rounded = if scaled.is_finite() {
            scaled.round() / scale
        } else {
            amount
        };
        if rounded == 0.0 {
            rounded = 0.0;
        }
        format!("{}{:.*}", self.symbol, self.decimals as usize, rounded)
    }
}
