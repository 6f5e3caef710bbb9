use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::core::{Placement, Visibility};
use crate::error::StarplotResult;
use crate::render::{Color, SceneBackend};

use super::StarplotEngine;
use super::validation::validate_len;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarplotSnapshot {
    pub name: String,
    pub axis_count: usize,
    pub radius: f64,
    pub bounding_scale: f64,
    pub visibility: Visibility,
    pub placement: Placement,
    pub current_data: Vec<f64>,
    pub axis_max: Vec<f64>,
    pub axis_directions: Vec<DVec3>,
    pub colors: Vec<Color>,
    pub units: Option<Vec<String>>,
    pub line_width: f64,
}

impl StarplotSnapshot {
    /// Checks that every per-axis vector holds `axis_count` entries.
    pub fn validate_shape(&self) -> StarplotResult<()> {
        validate_len("current_data", self.axis_count, self.current_data.len())?;
        validate_len("axis_max", self.axis_count, self.axis_max.len())?;
        validate_len("axis_directions", self.axis_count, self.axis_directions.len())?;
        validate_len("colors", self.axis_count, self.colors.len())?;
        if let Some(units) = &self.units {
            validate_len("units", self.axis_count, units.len())?;
        }
        Ok(())
    }
}

impl<B: SceneBackend> StarplotEngine<B> {
    #[must_use]
    pub fn snapshot(&self) -> StarplotSnapshot {
        StarplotSnapshot {
            name: self.core.name.clone(),
            axis_count: self.axis_count(),
            radius: self.radius(),
            bounding_scale: self.bounding_scale(),
            visibility: self.visibility(),
            placement: self.placement(),
            current_data: self.core.model.current_data.clone(),
            axis_max: self.core.model.axis_max.clone(),
            axis_directions: self.axis_directions().to_vec(),
            colors: self.core.presentation.colors.clone(),
            units: self.core.presentation.units.clone(),
            line_width: self.line_width(),
        }
    }
}
