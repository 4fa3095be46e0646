//! Temperature units and their conversions through celsius.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Offset between celsius and kelvin.
const KELVIN_OFFSET: f64 = 273.15;

/// A supported temperature scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// The unit name matched none of the supported scales.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown unit: {0}")]
pub struct UnknownUnit(pub String);

impl TemperatureUnit {
    /// Express `value` (in this unit) in celsius.
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            Self::Kelvin => value - KELVIN_OFFSET,
        }
    }

    /// Express a celsius `value` in this unit.
    pub fn from_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => value * 9.0 / 5.0 + 32.0,
            Self::Kelvin => value + KELVIN_OFFSET,
        }
    }

    /// Convert `value` from this unit into `target`.
    ///
    /// Same-unit conversions return `value` untouched.
    pub fn convert(self, value: f64, target: Self) -> f64 {
        if self == target {
            return value;
        }
        target.from_celsius(self.to_celsius(value))
    }

    /// Lowercase name as accepted in tool arguments.
    pub fn name(self) -> &'static str {
        match self {
            Self::Celsius => "celsius",
            Self::Fahrenheit => "fahrenheit",
            Self::Kelvin => "kelvin",
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "celsius" => Ok(Self::Celsius),
            "fahrenheit" => Ok(Self::Fahrenheit),
            "kelvin" => Ok(Self::Kelvin),
            _ => Err(UnknownUnit(s.to_string())),
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("celsius".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Celsius));
        assert_eq!(" Fahrenheit ".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Fahrenheit));
        assert_eq!("KELVIN".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Kelvin));
        assert_eq!(
            "rankine".parse::<TemperatureUnit>(),
            Err(UnknownUnit("rankine".to_string()))
        );
    }

    #[test]
    fn test_known_points() {
        use TemperatureUnit::*;
        assert_eq!(Celsius.convert(100.0, Fahrenheit), 212.0);
        assert_eq!(Fahrenheit.convert(32.0, Celsius), 0.0);
        assert_eq!(Celsius.convert(0.0, Kelvin), 273.15);
        assert_eq!(Kelvin.convert(273.15, Celsius), 0.0);
        assert!((Fahrenheit.convert(212.0, Kelvin) - 373.15).abs() < 1e-9);
    }

    #[test]
    fn test_identity_is_exact() {
        for unit in [
            TemperatureUnit::Celsius,
            TemperatureUnit::Fahrenheit,
            TemperatureUnit::Kelvin,
        ] {
            assert_eq!(unit.convert(0.1, unit), 0.1);
            assert_eq!(unit.convert(-459.67, unit), -459.67);
        }
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        let unit = TemperatureUnit::Kelvin;
        assert_eq!(unit.to_string().parse::<TemperatureUnit>(), Ok(unit));
    }
}
