pub mod agents;
#[cfg(any(feature = "gui", test))]
pub mod pixel_format;
