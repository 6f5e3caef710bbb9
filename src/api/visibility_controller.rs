use tracing::debug;

use crate::core::Visibility;
use crate::error::StarplotResult;
use crate::render::SceneBackend;

use super::StarplotEngine;

impl<B: SceneBackend> StarplotEngine<B> {
    /// Stops rendering wedges and axis lines. No-op when already hidden.
    pub fn hide(&mut self) -> StarplotResult<()> {
        if !self.core.presentation.visibility.is_visible() {
            return Ok(());
        }
        self.core.presentation.visibility = Visibility::Hidden;
        self.set_renderables_enabled(false)?;
        debug!(name = %self.core.name, "hid starplot");
        Ok(())
    }

    /// Re-enables rendering, then refreshes labels and wedges once.
    /// No-op when already visible.
    pub fn show(&mut self) -> StarplotResult<()> {
        if self.core.presentation.visibility.is_visible() {
            return Ok(());
        }
        self.core.presentation.visibility = Visibility::Visible;
        self.set_renderables_enabled(true)?;
        self.sync_labels()?;
        self.sync_wedges()?;
        debug!(name = %self.core.name, "showed starplot");
        Ok(())
    }

    fn set_renderables_enabled(&mut self, enabled: bool) -> StarplotResult<()> {
        let handles: Vec<_> = self.core.arena.renderable_handles().collect();
        for handle in handles {
            self.backend.set_enabled(handle, enabled)?;
        }
        Ok(())
    }
}
