pub mod paint_row;
pub mod ports;
