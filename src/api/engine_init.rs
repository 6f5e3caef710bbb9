use glam::DMat4;
use tracing::{debug, warn};

use crate::core::{AxisLayout, AxisPosition, Easer, Placement, Visibility};
use crate::error::{StarplotError, StarplotResult};
use crate::render::{PrimitiveKind, SceneBackend};

use super::engine_core::{EngineCore, StarplotModel, StarplotPresentation};
use super::primitive_arena::PrimitiveArena;
use super::validation::validate_config;
use super::{AxisSource, StarplotConfig, StarplotEngine};

impl<B: SceneBackend> StarplotEngine<B> {
    /// Creates the chart, registers its root container and draws the initial
    /// axes and wedges.
    ///
    /// Fails without touching the scene when the config is invalid or the
    /// chart name is already registered.
    pub fn new(mut backend: B, config: StarplotConfig) -> StarplotResult<Self> {
        let axis_count = validate_config(&config)?;
        let data_easer = Easer::new(config.data_ease_divisor)?;
        let axis_easer = Easer::new(config.axis_ease_divisor)?;

        if backend.find(&config.name).is_some() {
            warn!(name = %config.name, "rejecting duplicate starplot name");
            return Err(StarplotError::DuplicateName(config.name));
        }

        let placement = Placement::at(config.position);
        let parent_world = config
            .parent
            .map_or(DMat4::IDENTITY, |parent| backend.world_transform(parent));
        let positions: Vec<AxisPosition> = match &config.axes {
            AxisSource::Count(count) => vec![AxisPosition::Default; *count],
            AxisSource::WorldPositions(world_positions) => world_positions
                .iter()
                .map(|world| AxisPosition::Explicit(placement.world_to_local(parent_world, *world)))
                .collect(),
        };
        let layout = AxisLayout::resolve(&positions, config.radius)?;

        let root = backend.create(&config.name, PrimitiveKind::Container, config.parent)?;
        let colors = config.resolved_colors();
        let mut engine = Self {
            backend,
            core: EngineCore {
                model: StarplotModel {
                    layout,
                    current_data: config.initial_data,
                    axis_max: config.axis_max,
                },
                presentation: StarplotPresentation {
                    colors,
                    units: config.units,
                    line_width: config.line_width,
                    axis_line_color: config.axis_line_color,
                    label_color: config.label_color,
                    wedge_material: config.wedge_material,
                    visibility: Visibility::Visible,
                    placement,
                },
                arena: PrimitiveArena::new(root, axis_count),
                name: config.name,
                parent: config.parent,
                data_easer,
                axis_easer,
            },
        };

        if let Err(err) = engine.draw_initial_scene() {
            warn!(name = %engine.core.name, error = %err, "starplot setup failed, releasing root");
            if let Err(cleanup_err) = engine.backend.destroy(root) {
                warn!(error = %cleanup_err, "failed to release starplot root after setup error");
            }
            return Err(err);
        }

        debug!(
            name = %engine.core.name,
            axis_count,
            bounding_scale = engine.bounding_scale(),
            "created starplot"
        );
        Ok(engine)
    }

    fn draw_initial_scene(&mut self) -> StarplotResult<()> {
        self.sync_root()?;
        self.sync_axes()?;
        self.sync_wedges()
    }
}
