use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;

pub const MIN_ZOOM: f64 = 1e-6;
pub const DEFAULT_ZOOM: f64 = 200.0;

/// Raises a requested zoom to the smallest zoom the mapping accepts.
#[must_use]
pub fn clamp_zoom(zoom: f64) -> f64 {
    // NaN passes through so validation reports it as non-finite.
    if zoom.is_nan() { zoom } else { zoom.max(MIN_ZOOM) }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidZoom { zoom: f64 },
    InvalidSize { width: u32, height: u32 },
    NonFiniteInput { field: &'static str },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoom { zoom } => write!(f, "zoom must be positive: {}", zoom),
            Self::InvalidSize { width, height } => {
                write!(f, "viewport size must be positive: {}x{}", width, height)
            }
            Self::NonFiniteInput { field } => write!(f, "viewport {} must be finite", field),
        }
    }
}

impl Error for ViewportError {}

/// Zoom and pan state mapping a `width` x `height` pixel grid onto the
/// complex plane. `zoom` is pixels per unit; `offset` is the complex
/// coordinate under the centre of the grid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    offset: Complex,
    pixel_rect: PixelRect,
}

impl Viewport {
    pub fn new(
        zoom: f64,
        offset_x: f64,
        offset_y: f64,
        width: u32,
        height: u32,
    ) -> Result<Self, ViewportError> {
        if !zoom.is_finite() {
            return Err(ViewportError::NonFiniteInput { field: "zoom" });
        }
        if !offset_x.is_finite() {
            return Err(ViewportError::NonFiniteInput { field: "offset_x" });
        }
        if !offset_y.is_finite() {
            return Err(ViewportError::NonFiniteInput { field: "offset_y" });
        }
        if zoom <= 0.0 {
            return Err(ViewportError::InvalidZoom { zoom });
        }

        let pixel_rect = PixelRect::with_size(width, height)
            .map_err(|_| ViewportError::InvalidSize { width, height })?;

        Ok(Self {
            zoom,
            offset: Complex {
                real: offset_x,
                imag: offset_y,
            },
            pixel_rect,
        })
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn offset(&self) -> Complex {
        self.offset
    }

    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.offset.real
    }

    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.offset.imag
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixel_rect.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixel_rect.height()
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    /// Pixel position that maps exactly onto `offset`.
    #[must_use]
    pub fn centre(&self) -> (f64, f64) {
        (f64::from(self.width()) / 2.0, f64::from(self.height()) / 2.0)
    }

    /// Extent of the complex plane covered by the whole pixel grid.
    #[must_use]
    pub fn complex_span(&self) -> (f64, f64) {
        (
            f64::from(self.width()) / self.zoom,
            f64::from(self.height()) / self.zoom,
        )
    }

    /// Multiplies the zoom by `factor`, keeping the centre fixed.
    ///
    /// Non-positive or non-finite factors leave the viewport unchanged.
    #[must_use]
    pub fn zoomed(&self, factor: f64) -> Self {
        let zoom = self.zoom * factor;

        if !factor.is_finite() || factor <= 0.0 || !zoom.is_finite() {
            return *self;
        }

        Self {
            zoom: clamp_zoom(zoom),
            ..*self
        }
    }

    /// Moves the view by a distance given in screen pixels.
    #[must_use]
    pub fn panned(&self, dx_pixels: f64, dy_pixels: f64) -> Self {
        let offset = Complex {
            real: self.offset.real + dx_pixels / self.zoom,
            imag: self.offset.imag + dy_pixels / self.zoom,
        };

        if !offset.is_finite() {
            return *self;
        }

        Self { offset, ..*self }
    }

    /// Default zoom centred on the origin, same pixel size.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            offset: Complex {
                real: 0.0,
                imag: 0.0,
            },
            ..*self
        }
    }

    pub fn resized(&self, width: u32, height: u32) -> Result<Self, ViewportError> {
        Self::new(self.zoom, self.offset.real, self.offset.imag, width, height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            offset: Complex {
                real: 0.0,
                imag: 0.0,
            },
            pixel_rect: PixelRect::with_size(800, 600).expect("default pixel rect is valid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let viewport = Viewport::new(200.0, -0.5, 0.25, 800, 600).unwrap();

        assert_eq!(viewport.zoom(), 200.0);
        assert_eq!(viewport.offset_x(), -0.5);
        assert_eq!(viewport.offset_y(), 0.25);
        assert_eq!(viewport.width(), 800);
        assert_eq!(viewport.height(), 600);
    }

    #[test]
    fn test_zoom_must_be_positive() {
        assert_eq!(
            Viewport::new(0.0, 0.0, 0.0, 10, 10),
            Err(ViewportError::InvalidZoom { zoom: 0.0 })
        );
        assert_eq!(
            Viewport::new(-1.0, 0.0, 0.0, 10, 10),
            Err(ViewportError::InvalidZoom { zoom: -1.0 })
        );
    }

    #[test]
    fn test_size_must_be_positive() {
        assert_eq!(
            Viewport::new(1.0, 0.0, 0.0, 0, 10),
            Err(ViewportError::InvalidSize {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            Viewport::new(1.0, 0.0, 0.0, 10, 0),
            Err(ViewportError::InvalidSize {
                width: 10,
                height: 0
            })
        );
    }

    #[test]
    fn test_non_finite_inputs_are_rejected() {
        assert_eq!(
            Viewport::new(f64::NAN, 0.0, 0.0, 10, 10),
            Err(ViewportError::NonFiniteInput { field: "zoom" })
        );
        assert_eq!(
            Viewport::new(1.0, f64::INFINITY, 0.0, 10, 10),
            Err(ViewportError::NonFiniteInput { field: "offset_x" })
        );
        assert_eq!(
            Viewport::new(1.0, 0.0, f64::NEG_INFINITY, 10, 10),
            Err(ViewportError::NonFiniteInput { field: "offset_y" })
        );
    }

    #[test]
    fn test_clamp_zoom() {
        assert_eq!(clamp_zoom(0.0), MIN_ZOOM);
        assert_eq!(clamp_zoom(-5.0), MIN_ZOOM);
        assert!(clamp_zoom(f64::NAN).is_nan());
        assert_eq!(clamp_zoom(3.0), 3.0);
    }

    #[test]
    fn test_zoomed_keeps_offset() {
        let viewport = Viewport::new(200.0, 0.3, -0.2, 800, 600).unwrap();
        let zoomed = viewport.zoomed(1.5);

        assert_eq!(zoomed.zoom(), 300.0);
        assert_eq!(zoomed.offset(), viewport.offset());
    }

    #[test]
    fn test_zoomed_clamps_to_min_zoom() {
        let viewport = Viewport::new(1e-5, 0.0, 0.0, 8, 8).unwrap();

        assert_eq!(viewport.zoomed(1e-3).zoom(), MIN_ZOOM);
    }

    #[test]
    fn test_zoomed_ignores_invalid_factor() {
        let viewport = Viewport::default();

        assert_eq!(viewport.zoomed(0.0), viewport);
        assert_eq!(viewport.zoomed(f64::NAN), viewport);
    }

    #[test]
    fn test_panned_moves_by_pixels_over_zoom() {
        let viewport = Viewport::new(200.0, 0.0, 0.0, 800, 600).unwrap();
        let panned = viewport.panned(50.0, -50.0);

        assert_eq!(panned.offset_x(), 0.25);
        assert_eq!(panned.offset_y(), -0.25);
        assert_eq!(panned.zoom(), 200.0);
    }

    #[test]
    fn test_reset_restores_defaults_and_keeps_size() {
        let viewport = Viewport::new(1234.0, 1.0, 2.0, 320, 240).unwrap();
        let reset = viewport.reset();

        assert_eq!(reset.zoom(), DEFAULT_ZOOM);
        assert_eq!(reset.offset_x(), 0.0);
        assert_eq!(reset.offset_y(), 0.0);
        assert_eq!(reset.width(), 320);
        assert_eq!(reset.height(), 240);
    }

    #[test]
    fn test_doubling_zoom_halves_span() {
        let viewport = Viewport::new(100.0, 0.0, 0.0, 640, 480).unwrap();
        let (span_x, span_y) = viewport.complex_span();
        let (zoomed_x, zoomed_y) = viewport.zoomed(2.0).complex_span();

        assert_eq!(zoomed_x, span_x / 2.0);
        assert_eq!(zoomed_y, span_y / 2.0);
    }
}
