pub mod colour;
pub mod complex;
pub mod iteration_sample;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
pub mod render_params;
pub mod viewport;
