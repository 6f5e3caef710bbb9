use crate::error::StarplotResult;
use crate::render::StarplotFrame;

use super::axis_line_builder::build_axis_lines;
use super::engine_core::EngineCore;
use super::label_builder::build_labels;
use super::wedge_mesh_builder::build_wedges;

/// Materializes the full geometry snapshot for the current engine state.
///
/// Geometry is recomputed from scratch; nothing is diffed against the
/// previous frame.
pub(super) fn build_frame(core: &EngineCore) -> StarplotResult<StarplotFrame> {
    let model = &core.model;
    let presentation = &core.presentation;

    let mut frame = StarplotFrame::new(presentation.placement, model.layout.bounding_scale());
    frame.visible = presentation.visibility.is_visible();
    frame.lines = build_axis_lines(
        &model.layout,
        presentation.line_width,
        presentation.axis_line_color,
    );
    frame.wedges = build_wedges(
        &model.layout,
        &model.current_data,
        &model.axis_max,
        &presentation.colors,
    )?;
    frame.labels = build_labels(
        &model.layout,
        &model.current_data,
        presentation.units.as_deref(),
        presentation.label_color,
    )?;
    Ok(frame)
}
