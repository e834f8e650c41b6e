use crate::device::GlRequest;

/// Window and context configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    /// Requested size in logical pixels.
    pub width: u32,
    pub height: u32,
    pub gl: GlRequest,
}

impl WindowConfig {
    pub const DEFAULT_TITLE: &'static str = "Snek";
    pub const DEFAULT_WIDTH: u32 = 640;
    pub const DEFAULT_HEIGHT: u32 = 480;

    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            gl: GlRequest::default(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn gl(mut self, gl: GlRequest) -> Self {
        self.gl = gl;
        self
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TITLE, Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}
