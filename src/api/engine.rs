use glam::{DMat4, DVec3};
use tracing::{debug, warn};

use crate::core::{Axis, Placement, Visibility};
use crate::error::{StarplotError, StarplotResult};
use crate::render::{Color, FrameRenderer, SceneBackend, StarplotFrame};

use super::engine_core::EngineCore;
use super::frame_builder::build_frame;

/// Failed [`StarplotEngine::destroy`]: the backend is returned untouched
/// alongside the backend error.
#[derive(Debug)]
pub struct DestroyError<B> {
    pub backend: B,
    pub error: StarplotError,
}

impl<B> From<DestroyError<B>> for StarplotError {
    fn from(failure: DestroyError<B>) -> Self {
        failure.error
    }
}

/// Main orchestration facade consumed by host applications.
///
/// `StarplotEngine` owns the axis layout, eased data and styling of one chart
/// and pushes the derived geometry into its scene backend. Call
/// [`StarplotEngine::update`] once per host frame.
pub struct StarplotEngine<B: SceneBackend> {
    pub(super) backend: B,
    pub(super) core: EngineCore,
}

impl<B: SceneBackend> StarplotEngine<B> {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.core.name
    }

    #[must_use]
    pub fn axis_count(&self) -> usize {
        self.core.model.layout.axis_count()
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.core.model.layout.radius()
    }

    /// Current eased values, one per axis.
    #[must_use]
    pub fn current_data(&self) -> &[f64] {
        &self.core.model.current_data
    }

    #[must_use]
    pub fn axis_max(&self) -> &[f64] {
        &self.core.model.axis_max
    }

    /// Chart-local axis directions.
    #[must_use]
    pub fn axis_directions(&self) -> &[DVec3] {
        self.core.model.layout.directions()
    }

    #[must_use]
    pub fn axes(&self) -> Vec<Axis> {
        self.core
            .model
            .layout
            .directions()
            .iter()
            .enumerate()
            .map(|(index, direction)| Axis {
                index,
                direction: *direction,
                max_value: self.core.model.axis_max[index],
                color: self.core.presentation.colors[index],
            })
            .collect()
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.core.presentation.colors
    }

    #[must_use]
    pub fn units(&self) -> Option<&[String]> {
        self.core.presentation.units.as_deref()
    }

    #[must_use]
    pub fn line_width(&self) -> f64 {
        self.core.presentation.line_width
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.core.presentation.visibility
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        !self.core.presentation.visibility.is_visible()
    }

    /// Longest axis endpoint-to-origin distance.
    #[must_use]
    pub fn bounding_scale(&self) -> f64 {
        self.core.model.layout.bounding_scale()
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        self.core.presentation.placement
    }

    /// Geometry for the current state, without touching the scene.
    pub fn frame(&self) -> StarplotResult<StarplotFrame> {
        build_frame(&self.core)
    }

    /// Draws the current geometry through a whole-frame renderer.
    pub fn render_preview<F: FrameRenderer>(&self, renderer: &mut F) -> StarplotResult<()> {
        let frame = self.frame()?;
        renderer.render(&frame)
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Converts a world-space point into chart-local space.
    #[must_use]
    pub fn world_to_local(&self, world: DVec3) -> DVec3 {
        self.core
            .presentation
            .placement
            .world_to_local(self.parent_world_transform(), world)
    }

    /// Releases every primitive of the chart and hands the backend back.
    ///
    /// Only the root is destroyed; the backend releases its children. When
    /// that fails the backend comes back inside the error, with the chart's
    /// primitives still in place.
    pub fn destroy(mut self) -> Result<B, DestroyError<B>> {
        let root = self.core.arena.root();
        match self.backend.destroy(root) {
            Ok(()) => {
                debug!(name = %self.core.name, "destroyed starplot");
                Ok(self.backend)
            }
            Err(error) => {
                warn!(name = %self.core.name, %error, "failed to destroy starplot root");
                Err(DestroyError {
                    backend: self.backend,
                    error,
                })
            }
        }
    }

    /// Hands the backend back without releasing the chart's primitives.
    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }

    pub(super) fn parent_world_transform(&self) -> DMat4 {
        self.core
            .parent
            .map_or(DMat4::IDENTITY, |parent| self.backend.world_transform(parent))
    }
}
