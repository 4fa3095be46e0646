//! Currency formatting.

pub mod format;
pub mod table;

pub use format::{FormatCurrencyParams, FormatCurrencyTool};
pub use table::CurrencySpec;
