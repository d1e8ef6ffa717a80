pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod image_size;
pub mod pixel_buffer;
pub mod render_params;
pub mod row_result;
pub mod row_task;
