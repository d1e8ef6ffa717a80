pub mod blue_white_gradient;
pub mod classic_palette;
