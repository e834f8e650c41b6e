/// OpenGL profile requested for the context.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GlProfile {
    Core,
    Compatibility,
}

/// Context creation parameters.
///
/// The demos always ask for 3.3 core; anything older lacks the VAO/shader
/// path the graphics helpers use.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GlRequest {
    pub major: u8,
    pub minor: u8,
    pub profile: GlProfile,
}

impl GlRequest {
    pub const fn new(major: u8, minor: u8, profile: GlProfile) -> Self {
        Self { major, minor, profile }
    }

    /// Version formatted as a GLSL `#version` number (3.3 -> 330).
    pub fn glsl_version(&self) -> u32 {
        self.major as u32 * 100 + self.minor as u32 * 10
    }
}

impl Default for GlRequest {
    fn default() -> Self {
        Self::new(3, 3, GlProfile::Core)
    }
}
