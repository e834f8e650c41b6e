/// Viewport rectangle in framebuffer pixels, origin bottom-left.
///
/// Maps directly onto `glViewport(x, y, width, height)`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Viewport covering a whole framebuffer of `width` x `height` pixels.
    ///
    /// Sizes larger than `i32::MAX` saturate.
    #[inline]
    pub fn covering(width: u32, height: u32) -> Self {
        let clamp = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        Self::new(0, 0, clamp(width), clamp(height))
    }

    /// True when the viewport has no drawable area.
    ///
    /// Minimized windows report a 0x0 framebuffer.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}
