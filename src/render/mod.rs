mod frame;
mod in_memory_scene;
mod null_renderer;
mod primitives;
mod scene;

pub use frame::StarplotFrame;
pub use in_memory_scene::{InMemoryScene, SceneNode};
pub use null_renderer::NullRenderer;
pub use primitives::{
    AxisLabel, AxisLine, Color, LocalTransform, MaterialRef, PrimitiveHandle, PrimitiveKind,
    WedgeMesh,
};
pub use scene::SceneBackend;

use crate::error::StarplotResult;

/// Contract implemented by preview renderers that draw a whole frame at once.
///
/// Renderers receive a fully materialized `StarplotFrame`, so drawing code
/// stays isolated from easing and layout state.
pub trait FrameRenderer {
    fn render(&mut self, frame: &StarplotFrame) -> StarplotResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoPreviewRenderer, CairoRenderStats};
