use crate::coords::Viewport;
use crate::paint::Color;

/// Loop state shared by the harness, the event handlers and the draw callback.
///
/// Owned by one harness and only ever handed out as `&mut`, so every writer
/// runs on the loop thread in a well-defined order.
#[derive(Debug, Default)]
pub struct Controls {
    clear_color: Color,
    close_requested: bool,
    viewport: Viewport,
    pending_viewport: Option<Viewport>,
}

impl Controls {
    pub fn new(clear_color: Color) -> Self {
        Self {
            clear_color,
            ..Self::default()
        }
    }

    /// Color the next frame is cleared to.
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    /// Asks the loop to stop. Observed before the next frame starts.
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Last viewport applied to the context.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Queues a viewport change; applied before the next clear.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.pending_viewport = Some(viewport);
    }

    /// Takes the queued viewport, if any, and records it as current.
    pub(crate) fn take_pending_viewport(&mut self) -> Option<Viewport> {
        let next = self.pending_viewport.take()?;
        self.viewport = next;
        Some(next)
    }
}
