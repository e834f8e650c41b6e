use crate::coords::Viewport;
use crate::time::FrameTime;

use super::controls::Controls;

/// Per-frame context passed to the draw callback.
///
/// The color buffer has already been cleared when the callback runs; the
/// harness presents the frame after it returns.
pub struct FrameCtx<'a, G> {
    pub gl: &'a G,
    pub time: FrameTime,
    pub controls: &'a mut Controls,
}

impl<'a, G> FrameCtx<'a, G> {
    /// Viewport the frame is rendered against.
    pub fn viewport(&self) -> Viewport {
        self.controls.viewport()
    }

    /// Stops the loop after this frame is presented.
    pub fn request_close(&mut self) {
        self.controls.request_close();
    }
}
