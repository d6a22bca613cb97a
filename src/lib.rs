pub mod config;
mod controllers;
mod core;
mod presenters;

pub use config::Config;

pub use controllers::cli::cli_controller::CliController;
pub use controllers::interactive::{
    FrameData, InteractiveController, PresenterPort, RenderError, RenderEvent,
};
pub use controllers::navigation::{DEFAULT_HISTORY_CAPACITY, ViewHistory};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use presenters::file::ppm::PpmFilePresenter;

pub use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, GenerationToken, NeverCancel,
};
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon,
    generate_fractal_parallel_rayon_cancelable,
};
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer, generate_pixel_buffer_cancelable,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
pub use crate::core::actions::render_frame::render_frame::{
    RenderFrameError, render, render_cancelable, render_serial,
};
pub use crate::core::colour::colour_scheme::ColourScheme;
pub use crate::core::colour::palette::colorize;
pub use crate::core::colour::palette_colour_map::{PaletteColourMap, PaletteColourMapError};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::iteration_sample::IterationSample;
pub use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::render_params::{
    DEFAULT_MAX_ITERATIONS, JuliaConstant, MAX_ITERATIONS, MIN_ITERATIONS, RenderParams,
    RenderParamsError, clamp_max_iterations,
};
pub use crate::core::data::viewport::{DEFAULT_ZOOM, MIN_ZOOM, Viewport, ViewportError, clamp_zoom};
pub use crate::core::fractals::escape_time::algorithm::{EscapeTimeAlgorithm, iterate, iterate_with};
pub use crate::core::fractals::escape_time::update_rule::{
    BurningShip, Julia, Mandelbar, Mandelbrot, UpdateRule,
};
pub use crate::core::fractals::fractal_variant::{FractalVariant, ParseFractalVariantError};
pub use crate::core::transition::{ViewportTransition, ease_in_out_cubic, interpolate_viewport};
pub use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, complex_to_pixel, pixel_to_complex, pixel_to_complex_coords,
};
