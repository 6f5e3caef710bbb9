use crate::core::{AxisLayout, Easer, Placement, Visibility};
use crate::render::{Color, MaterialRef, PrimitiveHandle};

use super::primitive_arena::PrimitiveArena;

/// Data owned by the chart: axis layout, eased values and their caps.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct StarplotModel {
    pub(super) layout: AxisLayout,
    pub(super) current_data: Vec<f64>,
    pub(super) axis_max: Vec<f64>,
}

/// Styling and visibility state.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct StarplotPresentation {
    pub(super) colors: Vec<Color>,
    pub(super) units: Option<Vec<String>>,
    pub(super) line_width: f64,
    pub(super) axis_line_color: Color,
    pub(super) label_color: Color,
    pub(super) wedge_material: MaterialRef,
    pub(super) visibility: Visibility,
    pub(super) placement: Placement,
}

/// Internal engine state used by the public facade (`StarplotEngine`).
#[derive(Debug, Clone, PartialEq)]
pub(super) struct EngineCore {
    pub(super) name: String,
    pub(super) parent: Option<PrimitiveHandle>,
    pub(super) model: StarplotModel,
    pub(super) presentation: StarplotPresentation,
    pub(super) arena: PrimitiveArena,
    pub(super) data_easer: Easer,
    pub(super) axis_easer: Easer,
}
