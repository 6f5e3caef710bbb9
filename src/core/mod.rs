pub mod axis_layout;
pub mod easing;
pub mod placement;
pub mod types;
pub mod value_mapper;

pub use axis_layout::{
    AxisLayout, AxisPosition, DEFAULT_AXIS_DIRECTION, MIN_AXIS_COUNT, compare_clockwise,
    default_direction,
};
pub use easing::{Easer, ease_step};
pub use placement::Placement;
pub use types::{Axis, Visibility};
pub use value_mapper::{map_to_point, validate_axis_max};
