use glam::DVec3;

use crate::core::AxisLayout;
use crate::render::{AxisLine, Color};

/// Height of the axis lines above the chart plane.
pub const AXIS_LINE_LIFT: f64 = 0.03;

/// One line per axis, from the chart origin to `direction * radius`.
#[must_use]
pub fn build_axis_lines(layout: &AxisLayout, stroke_width: f64, color: Color) -> Vec<AxisLine> {
    (0..layout.axis_count())
        .map(|axis_index| AxisLine {
            axis_index,
            start: DVec3::ZERO,
            end: layout.endpoint(axis_index),
            stroke_width,
            color,
        })
        .collect()
}
