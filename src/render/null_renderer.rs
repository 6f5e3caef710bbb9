use crate::error::StarplotResult;
use crate::render::{FrameRenderer, StarplotFrame};

/// No-op frame renderer used by tests and headless previews.
///
/// It still validates frame content so invalid geometry is caught without a
/// real drawing backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_wedge_count: usize,
    pub last_label_count: usize,
    pub frames_rendered: u64,
}

impl FrameRenderer for NullRenderer {
    fn render(&mut self, frame: &StarplotFrame) -> StarplotResult<()> {
        frame.validate()?;
        self.last_line_count = frame.lines.len();
        self.last_wedge_count = frame.wedges.len();
        self.last_label_count = frame.labels.len();
        self.frames_rendered += 1;
        Ok(())
    }
}
