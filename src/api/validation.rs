use crate::core::{axis_layout, validate_axis_max};
use crate::error::{StarplotError, StarplotResult};
use crate::render::Color;

use super::StarplotConfig;

/// Validates everything a config carries before any scene primitive exists.
///
/// Returns the axis count.
pub(super) fn validate_config(config: &StarplotConfig) -> StarplotResult<usize> {
    let axis_count = axis_layout::validate_axis_count(config.axes.axis_count())?;
    axis_layout::validate_radius(config.radius)?;
    if config.name.is_empty() {
        return Err(StarplotError::InvalidData(
            "chart name must not be empty".to_owned(),
        ));
    }
    if !config.position.is_finite() {
        return Err(StarplotError::InvalidData(
            "chart position must be finite".to_owned(),
        ));
    }

    validate_data(axis_count, &config.initial_data)?;
    validate_axis_max_values(axis_count, &config.axis_max)?;
    match &config.colors {
        Some(colors) => validate_colors(axis_count, colors)?,
        None => config.color.validate()?,
    }
    if let Some(units) = &config.units {
        validate_len("units", axis_count, units.len())?;
    }
    validate_line_width(config.line_width)?;
    config.axis_line_color.validate()?;
    config.label_color.validate()?;
    Ok(axis_count)
}

pub(super) fn validate_len(
    field: &'static str,
    expected: usize,
    actual: usize,
) -> StarplotResult<()> {
    if expected != actual {
        return Err(StarplotError::ShapeMismatch {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}

pub(super) fn validate_data(axis_count: usize, data: &[f64]) -> StarplotResult<()> {
    validate_len("data", axis_count, data.len())?;
    if let Some(index) = data.iter().position(|value| !value.is_finite()) {
        return Err(StarplotError::InvalidData(format!(
            "data value at axis {index} must be finite"
        )));
    }
    Ok(())
}

pub(super) fn validate_axis_max_values(axis_count: usize, axis_max: &[f64]) -> StarplotResult<()> {
    validate_len("axis_max", axis_count, axis_max.len())?;
    for (index, value) in axis_max.iter().enumerate() {
        validate_axis_max(index, *value)?;
    }
    Ok(())
}

pub(super) fn validate_colors(axis_count: usize, colors: &[Color]) -> StarplotResult<()> {
    validate_len("colors", axis_count, colors.len())?;
    for color in colors {
        color.validate()?;
    }
    Ok(())
}

pub(super) fn validate_line_width(line_width: f64) -> StarplotResult<()> {
    if !line_width.is_finite() || line_width <= 0.0 {
        return Err(StarplotError::InvalidData(
            "line width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
