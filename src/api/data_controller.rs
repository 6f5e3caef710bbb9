use tracing::{trace, warn};

use crate::error::StarplotResult;
use crate::render::SceneBackend;

use super::StarplotEngine;
use super::validation::validate_data;

impl<B: SceneBackend> StarplotEngine<B> {
    /// Eases the displayed values one step toward `data`.
    ///
    /// Call this once per host frame. Every call closes a fixed fraction of
    /// the remaining gap, so the animation speed follows the frame rate. While
    /// hidden, the values still advance but no geometry or labels are pushed.
    pub fn update(&mut self, data: &[f64]) -> StarplotResult<()> {
        if let Err(err) = validate_data(self.axis_count(), data) {
            warn!(name = %self.core.name, error = %err, "rejecting starplot update");
            return Err(err);
        }

        let easer = self.core.data_easer;
        for (current, target) in self.core.model.current_data.iter_mut().zip(data) {
            *current = easer.step(*current, *target);
        }
        trace!(name = %self.core.name, data = ?self.core.model.current_data, "eased data");

        if self.core.presentation.visibility.is_visible() {
            self.sync_wedges()?;
            self.sync_labels()?;
        }
        Ok(())
    }
}
