use clap::Parser;
use std::path::PathBuf;

use crate::core::colour::colour_scheme::ColourScheme;
use crate::core::data::render_params::{
    DEFAULT_MAX_ITERATIONS, JuliaConstant, RenderParams, RenderParamsError, clamp_max_iterations,
};
use crate::core::data::viewport::{DEFAULT_ZOOM, Viewport, clamp_zoom};
use crate::core::fractals::fractal_variant::FractalVariant;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "escape-time",
    version,
    about = "Render Mandelbrot, Julia, Burning Ship and Mandelbar fractals to a PPM image"
)]
pub struct Config {
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Pixels per unit of the complex plane.
    #[arg(long, default_value_t = DEFAULT_ZOOM)]
    pub zoom: f64,

    /// Real part at the image centre.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub offset_x: f64,

    /// Imaginary part at the image centre.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub offset_y: f64,

    /// mandelbrot, julia, burning-ship or mandelbar.
    #[arg(long, default_value = "mandelbrot")]
    pub variant: FractalVariant,

    #[arg(long, default_value_t = -0.7, allow_negative_numbers = true)]
    pub julia_cx: f64,

    #[arg(long, default_value_t = 0.27015, allow_negative_numbers = true)]
    pub julia_cy: f64,

    /// Clamped to 10..=1000.
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// Unknown names fall back to grayscale.
    #[arg(long, default_value = "classic")]
    pub scheme: String,

    #[arg(long, default_value = "output/fractal.ppm")]
    pub output: PathBuf,

    /// Render on the calling thread only.
    #[arg(long, default_value_t = false)]
    pub serial: bool,
}

impl Config {
    pub fn colour_scheme(&self) -> ColourScheme {
        ColourScheme::parse(&self.scheme).unwrap_or_else(|| {
            log::warn!(
                "unknown colour scheme '{}', falling back to {}",
                self.scheme,
                ColourScheme::Grayscale
            );
            ColourScheme::Grayscale
        })
    }

    /// Clamps zoom and iteration cap into range, then validates the rest.
    pub fn to_render_params(&self) -> Result<RenderParams, RenderParamsError> {
        let zoom = clamp_zoom(self.zoom);
        if zoom > self.zoom {
            log::warn!("zoom {} raised to {}", self.zoom, zoom);
        }

        let max_iterations = clamp_max_iterations(self.max_iterations);
        if max_iterations != self.max_iterations {
            log::warn!(
                "max iterations {} clamped to {}",
                self.max_iterations,
                max_iterations
            );
        }

        let viewport = Viewport::new(zoom, self.offset_x, self.offset_y, self.width, self.height)?;

        RenderParams::new(
            viewport,
            self.variant,
            JuliaConstant {
                cx: self.julia_cx,
                cy: self.julia_cy,
            },
            max_iterations,
            self.colour_scheme(),
        )
    }
}
