use glam::DVec3;

use crate::core::AxisLayout;
use crate::error::StarplotResult;
use crate::render::{AxisLabel, Color};

use super::validation::validate_len;

pub const LABEL_LIFT: f64 = 0.01;
pub const LABEL_BACKGROUND_WIDTH_PER_CHAR: f64 = 0.005;
pub const LABEL_BACKGROUND_HEIGHT: f64 = 0.03;

/// Rounds half to even and appends the optional unit, e.g. `"42 km"`.
#[must_use]
pub fn format_label_text(value: f64, unit: Option<&str>) -> String {
    // `+ 0.0` folds a rounded `-0` into `0`.
    let rounded = value.round_ties_even() + 0.0;
    match unit {
        Some(unit) => format!("{rounded} {unit}"),
        None => format!("{rounded}"),
    }
}

/// Label position just past the axis endpoint, at unit direction times radius.
#[must_use]
pub fn label_anchor(layout: &AxisLayout, axis_index: usize) -> DVec3 {
    layout.directions()[axis_index].normalize_or_zero() * layout.radius()
        + DVec3::new(0.0, LABEL_LIFT, 0.0)
}

pub fn build_labels(
    layout: &AxisLayout,
    data: &[f64],
    units: Option<&[String]>,
    color: Color,
) -> StarplotResult<Vec<AxisLabel>> {
    let axis_count = layout.axis_count();
    validate_len("data", axis_count, data.len())?;
    if let Some(units) = units {
        validate_len("units", axis_count, units.len())?;
    }

    let labels = (0..axis_count)
        .map(|axis_index| {
            let unit = units.map(|units| units[axis_index].as_str());
            let text = format_label_text(data[axis_index], unit);
            let background_width = LABEL_BACKGROUND_WIDTH_PER_CHAR * text.chars().count() as f64;
            AxisLabel {
                axis_index,
                anchor: label_anchor(layout, axis_index),
                text,
                background_width,
                background_height: LABEL_BACKGROUND_HEIGHT,
                color,
            }
        })
        .collect();
    Ok(labels)
}
