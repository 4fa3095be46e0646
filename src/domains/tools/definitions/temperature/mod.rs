//! Temperature conversion.

pub mod convert;
pub mod unit;

pub use convert::{TemperatureConvertParams, TemperatureConvertTool};
pub use unit::TemperatureUnit;
