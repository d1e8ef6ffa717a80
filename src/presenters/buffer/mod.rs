pub mod buffer_painter;
