//! Translation from platform event types into `input` types.

pub(crate) mod winit;
