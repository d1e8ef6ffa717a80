pub mod shared_view;
pub mod view;
pub mod zoom_step;
