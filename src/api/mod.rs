mod axis_controller;
mod axis_line_builder;
mod data_controller;
mod engine;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod frame_builder;
mod json_contract;
mod label_builder;
mod presentation_controller;
mod primitive_arena;
mod scene_sync;
mod validation;
mod visibility_controller;
mod wedge_mesh_builder;

pub use axis_line_builder::{AXIS_LINE_LIFT, build_axis_lines};
pub use engine::{DestroyError, StarplotEngine};
pub use engine_config::{AxisSource, StarplotConfig};
pub use engine_snapshot::StarplotSnapshot;
pub use json_contract::{STARPLOT_SNAPSHOT_JSON_SCHEMA_V1, StarplotSnapshotJsonContractV1};
pub use label_builder::{
    LABEL_BACKGROUND_HEIGHT, LABEL_BACKGROUND_WIDTH_PER_CHAR, LABEL_LIFT, build_labels,
    format_label_text, label_anchor,
};
pub use primitive_arena::PrimitiveKey;
pub use wedge_mesh_builder::{
    WEDGE_DEPTH_OFFSET, WEDGE_INDICES, WEDGE_LIFT, build_wedges, face_normal,
};
