use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon_cancelable,
};
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer_cancelable,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMapError;
use crate::core::colour::palette_colour_map::PaletteColourMap;
use crate::core::data::iteration_sample::IterationSample;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::render_params::RenderParams;
use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::escape_time::update_rule::{
    BurningShip, Julia, Mandelbar, Mandelbrot, UpdateRule,
};
use crate::core::fractals::fractal_variant::FractalVariant;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RenderFrameError {
    Cancelled(Cancelled),
    Algorithm(PixelToComplexCoordsError),
    ColourMap(ColourMapError),
    PixelBuffer(PixelBufferError),
}

impl RenderFrameError {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Algorithm(err) => write!(f, "algorithm error: {}", err),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::Algorithm(err) => Some(err),
            Self::ColourMap(err) => Some(&**err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<GenerateFractalError<PixelToComplexCoordsError>> for RenderFrameError {
    fn from(err: GenerateFractalError<PixelToComplexCoordsError>) -> Self {
        match err {
            GenerateFractalError::Cancelled(c) => Self::Cancelled(c),
            GenerateFractalError::Algorithm(err) => Self::Algorithm(err),
        }
    }
}

impl From<GeneratePixelBufferError> for RenderFrameError {
    fn from(err: GeneratePixelBufferError) -> Self {
        match err {
            GeneratePixelBufferError::Cancelled(c) => Self::Cancelled(c),
            GeneratePixelBufferError::ColourMap(err) => Self::ColourMap(err),
            GeneratePixelBufferError::PixelBuffer(err) => Self::PixelBuffer(err),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Execution {
    Parallel,
    Serial,
}

/// Renders one frame across the rayon pool.
pub fn render(params: &RenderParams) -> Result<PixelBuffer, RenderFrameError> {
    render_cancelable(params, &NeverCancel)
}

/// Renders one frame, giving up with [`RenderFrameError::Cancelled`] as soon
/// as `cancel` fires. No partial buffer is returned.
pub fn render_cancelable<C: CancelToken>(
    params: &RenderParams,
    cancel: &C,
) -> Result<PixelBuffer, RenderFrameError> {
    render_with(params, cancel, Execution::Parallel)
}

/// Renders one frame on the calling thread.
pub fn render_serial(params: &RenderParams) -> Result<PixelBuffer, RenderFrameError> {
    render_with(params, &NeverCancel, Execution::Serial)
}

fn render_with<C: CancelToken>(
    params: &RenderParams,
    cancel: &C,
    execution: Execution,
) -> Result<PixelBuffer, RenderFrameError> {
    let viewport = params.viewport();

    log::debug!(
        "rendering {}x{} {} frame, zoom {}, offset ({}, {}), {} iterations, {} colours",
        viewport.width(),
        viewport.height(),
        params.variant(),
        viewport.zoom(),
        viewport.offset_x(),
        viewport.offset_y(),
        params.max_iterations(),
        params.colour_scheme(),
    );

    // The rule is picked once here so the per-pixel loop is monomorphic.
    let samples = match params.variant() {
        FractalVariant::Mandelbrot => compute_samples::<Mandelbrot, C>(params, cancel, execution),
        FractalVariant::Julia => compute_samples::<Julia, C>(params, cancel, execution),
        FractalVariant::BurningShip => compute_samples::<BurningShip, C>(params, cancel, execution),
        FractalVariant::Mandelbar => compute_samples::<Mandelbar, C>(params, cancel, execution),
    }?;

    if cancel.is_cancelled() {
        return Err(RenderFrameError::Cancelled(Cancelled));
    }

    let colour_map = PaletteColourMap::new(params.colour_scheme(), params.max_iterations());

    Ok(generate_pixel_buffer_cancelable(
        samples,
        &colour_map,
        viewport.pixel_rect(),
        cancel,
    )?)
}

fn compute_samples<R: UpdateRule, C: CancelToken>(
    params: &RenderParams,
    cancel: &C,
    execution: Execution,
) -> Result<Vec<IterationSample>, RenderFrameError> {
    let viewport = params.viewport();
    let algorithm =
        EscapeTimeAlgorithm::<R>::new(viewport, params.julia_constant(), params.max_iterations());

    match execution {
        Execution::Parallel => Ok(generate_fractal_parallel_rayon_cancelable(
            viewport.pixel_rect(),
            &algorithm,
            cancel,
        )?),
        Execution::Serial => generate_fractal_serial(viewport.pixel_rect(), &algorithm)
            .map_err(RenderFrameError::Algorithm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour::colour_scheme::ColourScheme;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use crate::core::data::render_params::JuliaConstant;
    use crate::core::data::viewport::Viewport;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn params(variant: FractalVariant, scheme: ColourScheme) -> RenderParams {
        let viewport = Viewport::new(40.0, -0.5, 0.0, 64, 48).unwrap();

        RenderParams::new(viewport, variant, JuliaConstant::default(), 60, scheme).unwrap()
    }

    #[test]
    fn test_buffer_is_width_times_height_rgba() {
        let buffer = render(&params(FractalVariant::Mandelbrot, ColourScheme::Classic)).unwrap();

        assert_eq!(buffer.width(), 64);
        assert_eq!(buffer.height(), 48);
        assert_eq!(buffer.buffer_size(), 64 * 48 * 4);
    }

    #[test]
    fn test_render_is_deterministic() {
        for &variant in FractalVariant::ALL {
            let params = params(variant, ColourScheme::Psychedelic);

            assert_eq!(render(&params).unwrap(), render(&params).unwrap());
        }
    }

    #[test]
    fn test_parallel_matches_serial_for_every_variant() {
        for &variant in FractalVariant::ALL {
            let params = params(variant, ColourScheme::Rainbow);

            assert_eq!(
                render(&params).unwrap(),
                render_serial(&params).unwrap(),
                "{}",
                variant
            );
        }
    }

    #[test]
    fn test_origin_pixel_is_interior_black() {
        let viewport = Viewport::new(100.0, 0.0, 0.0, 8, 8).unwrap();
        let params = RenderParams::new(
            viewport,
            FractalVariant::Mandelbrot,
            JuliaConstant::default(),
            50,
            ColourScheme::Fiery,
        )
        .unwrap();

        let buffer = render(&params).unwrap();

        assert_eq!(buffer.pixel(Point { x: 4, y: 4 }).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_far_pixel_escapes_immediately() {
        // pixel (0, 0) sits at -4 - 4i, outside the escape radius
        let viewport = Viewport::new(1.0, 0.0, 0.0, 8, 8).unwrap();
        let params = RenderParams::new(
            viewport,
            FractalVariant::BurningShip,
            JuliaConstant::default(),
            50,
            ColourScheme::Fiery,
        )
        .unwrap();

        let buffer = render(&params).unwrap();

        assert_eq!(
            buffer.pixel(Point { x: 0, y: 0 }).unwrap(),
            Colour::opaque(0, 0, 64)
        );
    }

    #[test]
    fn test_cancelled_render_returns_cancelled() {
        let cancel = || true;

        let params = params(FractalVariant::Julia, ColourScheme::Grayscale);

        let result = render_cancelable(&params, &cancel);

        assert!(matches!(result, Err(RenderFrameError::Cancelled(_))));
        assert!(result.unwrap_err().is_cancelled());
    }

    #[test]
    fn test_cancel_between_stages_discards_samples() {
        // 48 rows poll once each; the next poll happens between the stages
        let polls = AtomicUsize::new(0);
        let cancel = || polls.fetch_add(1, Ordering::Relaxed) >= 48;

        let params = params(FractalVariant::Mandelbrot, ColourScheme::Classic);

        let result = render_cancelable(&params, &cancel);

        assert!(matches!(result, Err(RenderFrameError::Cancelled(_))));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            RenderFrameError::Cancelled(Cancelled).to_string(),
            "render cancelled"
        );
        assert_eq!(
            RenderFrameError::ColourMap("bad colour".into()).to_string(),
            "colour map error: bad colour"
        );
    }
}
