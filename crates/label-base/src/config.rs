//! Construction constants for label bases.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Geometry constants used by the generator. All lengths are millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Label thickness the default depth is derived from.
    pub reference_depth_mm: f64,
    /// Radius of the four rounded corners of the footprint.
    pub corner_radius_mm: f64,
    /// Radius of the top-edge fillet. Zero disables filleting.
    pub edge_fillet_radius_mm: f64,
    /// Edges whose centroids are this close along Z count as one level.
    pub group_tolerance_mm: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            reference_depth_mm: 0.6,
            corner_radius_mm: 1.0,
            edge_fillet_radius_mm: 0.1,
            group_tolerance_mm: 1e-6,
        }
    }
}

impl GeneratorConfig {
    /// Default settings with the top-edge fillet turned off.
    pub fn without_fillet() -> Self {
        Self {
            edge_fillet_radius_mm: 0.0,
            ..Self::default()
        }
    }

    /// Depth used when a request carries none: half the reference depth.
    pub fn default_depth_mm(&self) -> f64 {
        self.reference_depth_mm / 2.0
    }

    pub fn fillet_enabled(&self) -> bool {
        self.edge_fillet_radius_mm > 0.0
    }

    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("reference_depth_mm", self.reference_depth_mm)?;
        check_non_negative("corner_radius_mm", self.corner_radius_mm)?;
        check_non_negative("edge_fillet_radius_mm", self.edge_fillet_radius_mm)?;
        check_positive("group_tolerance_mm", self.group_tolerance_mm)?;
        Ok(())
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be positive, got {}", value),
        })
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be zero or positive, got {}", value),
        })
    }
}
