use tracing::debug;

use crate::error::StarplotResult;
use crate::render::{Color, SceneBackend};

use super::StarplotEngine;
use super::validation::{validate_axis_max_values, validate_colors, validate_len, validate_line_width};

impl<B: SceneBackend> StarplotEngine<B> {
    /// Uses one color for every axis. Takes effect on the next rebuild.
    pub fn set_color(&mut self, color: Color) -> StarplotResult<()> {
        color.validate()?;
        self.core.presentation.colors = vec![color; self.axis_count()];
        Ok(())
    }

    /// Sets per-axis colors. Takes effect on the next rebuild.
    pub fn set_colors(&mut self, colors: Vec<Color>) -> StarplotResult<()> {
        validate_colors(self.axis_count(), &colors)?;
        self.core.presentation.colors = colors;
        Ok(())
    }

    /// Sets per-axis unit suffixes for value labels; `None` removes them.
    pub fn set_units(&mut self, units: Option<Vec<String>>) -> StarplotResult<()> {
        if let Some(units) = &units {
            validate_len("units", self.axis_count(), units.len())?;
        }
        self.core.presentation.units = units;
        Ok(())
    }

    /// Replaces the per-axis normalization caps. Takes effect on the next rebuild.
    pub fn set_axis_max(&mut self, axis_max: Vec<f64>) -> StarplotResult<()> {
        validate_axis_max_values(self.axis_count(), &axis_max)?;
        self.core.model.axis_max = axis_max;
        Ok(())
    }

    /// Changes the stroke width and resubmits every axis line right away.
    pub fn set_line_width(&mut self, line_width: f64) -> StarplotResult<()> {
        validate_line_width(line_width)?;
        self.core.presentation.line_width = line_width;
        self.sync_axes()?;
        debug!(name = %self.core.name, line_width, "set axis line width");
        Ok(())
    }
}
