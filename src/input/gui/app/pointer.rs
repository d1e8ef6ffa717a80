use crate::core::navigation::zoom_step::{ZoomDirection, ZoomStep};

/// Left click zooms in around the cursor, shift-click zooms out.
#[must_use]
pub fn click_zoom_step(x: f64, y: f64, shift_held: bool) -> ZoomStep {
    let direction = if shift_held {
        ZoomDirection::Out
    } else {
        ZoomDirection::In
    };

    ZoomStep { direction, x, y }
}
