pub mod compute_row;
pub mod paint_row;
