//! Length quantities and their normalization to millimeters.
//!
//! The generator only talks to [`LengthNormalizer`]; [`StandardUnits`] is the
//! stock implementation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors from parsing or converting a length.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitError {
    #[error("unknown length unit '{unit}'")]
    UnknownUnit { unit: String },

    #[error("'{input}' has no unit")]
    MissingUnit { input: String },

    #[error("'{input}' does not start with a number")]
    InvalidMagnitude { input: String },

    #[error("length must be finite, got {magnitude}")]
    NonFinite { magnitude: f64 },

    #[error("length must be positive, got {magnitude} {unit}")]
    NonPositive { magnitude: f64, unit: String },
}

/// Units a length may be given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Millimeter,
    Centimeter,
    Meter,
    Inch,
    Foot,
    Point,
}

impl LengthUnit {
    /// Millimeters per one of this unit.
    pub fn millimeters(self) -> f64 {
        match self {
            LengthUnit::Millimeter => 1.0,
            LengthUnit::Centimeter => 10.0,
            LengthUnit::Meter => 1000.0,
            LengthUnit::Inch => 25.4,
            LengthUnit::Foot => 304.8,
            LengthUnit::Point => 25.4 / 72.0,
        }
    }

    /// Parse a unit label such as `mm`, `inches` or `"`. Case-insensitive.
    pub fn from_label(label: &str) -> Result<Self, UnitError> {
        let unit = match label.trim().to_ascii_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => {
                LengthUnit::Millimeter
            }
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                LengthUnit::Centimeter
            }
            "m" | "meter" | "meters" | "metre" | "metres" => LengthUnit::Meter,
            "in" | "inch" | "inches" | "\"" => LengthUnit::Inch,
            "ft" | "foot" | "feet" | "'" => LengthUnit::Foot,
            "pt" | "point" | "points" => LengthUnit::Point,
            _ => {
                return Err(UnitError::UnknownUnit {
                    unit: label.to_string(),
                })
            }
        };
        Ok(unit)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
            LengthUnit::Point => "pt",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A magnitude paired with an unparsed unit label, as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Length {
    pub magnitude: f64,
    pub unit: String,
}

impl Length {
    pub fn new(magnitude: f64, unit: impl Into<String>) -> Self {
        Self {
            magnitude,
            unit: unit.into(),
        }
    }

    pub fn mm(magnitude: f64) -> Self {
        Self::new(magnitude, "mm")
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit)
    }
}

impl FromStr for Length {
    type Err = UnitError;

    /// Parse `"5mm"`, `"0.5 cm"`, `"1e-2 in"`: the longest numeric prefix is
    /// the magnitude, the rest the unit label. The label is not checked here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let split = input
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .rev()
            .find(|&end| input[..end].trim_end().parse::<f64>().is_ok());

        let Some(end) = split else {
            return Err(UnitError::InvalidMagnitude {
                input: s.to_string(),
            });
        };
        let magnitude = input[..end].trim_end().parse::<f64>().map_err(|_| {
            UnitError::InvalidMagnitude {
                input: s.to_string(),
            }
        })?;
        let unit = input[end..].trim();
        if unit.is_empty() {
            return Err(UnitError::MissingUnit {
                input: s.to_string(),
            });
        }
        Ok(Length::new(magnitude, unit))
    }
}

/// Narrow interface to a unit system.
pub trait LengthNormalizer {
    /// The plain magnitude of `length` expressed in `target`.
    fn magnitude_in(&self, length: &Length, target: LengthUnit) -> Result<f64, UnitError>;

    fn to_millimeters(&self, length: &Length) -> Result<f64, UnitError> {
        self.magnitude_in(length, LengthUnit::Millimeter)
    }
}

/// Fixed-factor conversions between the units of [`LengthUnit`].
/// Rejects non-finite and non-positive magnitudes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardUnits;

impl LengthNormalizer for StandardUnits {
    fn magnitude_in(&self, length: &Length, target: LengthUnit) -> Result<f64, UnitError> {
        let unit = LengthUnit::from_label(&length.unit)?;
        if !length.magnitude.is_finite() {
            return Err(UnitError::NonFinite {
                magnitude: length.magnitude,
            });
        }
        if length.magnitude <= 0.0 {
            return Err(UnitError::NonPositive {
                magnitude: length.magnitude,
                unit: length.unit.clone(),
            });
        }
        if unit == target {
            return Ok(length.magnitude);
        }
        Ok(length.magnitude * unit.millimeters() / target.millimeters())
    }
}
