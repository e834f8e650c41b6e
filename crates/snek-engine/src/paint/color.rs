/// Straight-alpha RGBA color, one `f32` per channel.
///
/// This is the value handed to `glClearColor`, so channels are not
/// premultiplied and are not converted between color spaces.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    // Arrow-key presets. Alpha is zero, matching what the demos always cleared with.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}
