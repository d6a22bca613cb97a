use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
                    point.x,
                    point.y,
                    pixel_rect.top_left().x,
                    pixel_rect.top_left().y,
                    pixel_rect.bottom_right().x,
                    pixel_rect.bottom_right().y
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a (possibly fractional) pixel position onto the complex plane.
///
/// The pixel at `(width / 2, height / 2)` lands exactly on the viewport
/// offset; one pixel is `1 / zoom` units on both axes.
#[must_use]
pub fn pixel_to_complex(x: f64, y: f64, viewport: &Viewport) -> Complex {
    let (centre_x, centre_y) = viewport.centre();

    Complex {
        real: (x - centre_x) / viewport.zoom() + viewport.offset_x(),
        imag: (y - centre_y) / viewport.zoom() + viewport.offset_y(),
    }
}

/// Inverse of [`pixel_to_complex`].
#[must_use]
pub fn complex_to_pixel(c: Complex, viewport: &Viewport) -> (f64, f64) {
    let (centre_x, centre_y) = viewport.centre();

    (
        (c.real - viewport.offset_x()) * viewport.zoom() + centre_x,
        (c.imag - viewport.offset_y()) * viewport.zoom() + centre_y,
    )
}

pub fn pixel_to_complex_coords(
    pixel_position: Point,
    viewport: &Viewport,
) -> Result<Complex, PixelToComplexCoordsError> {
    let pixel_rect = viewport.pixel_rect();

    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    Ok(pixel_to_complex(
        f64::from(pixel_position.x),
        f64::from(pixel_position.y),
        viewport,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_to_complex_centre_is_offset() {
        let viewport = Viewport::new(350.0, -0.743, 0.131, 800, 600).unwrap();

        let result = pixel_to_complex_coords(Point { x: 400, y: 300 }, &viewport).unwrap();

        assert_eq!(result.real, -0.743);
        assert_eq!(result.imag, 0.131);
    }

    #[test]
    fn test_pixel_to_complex_top_left() {
        let viewport = Viewport::new(100.0, 0.0, 0.0, 400, 200).unwrap();

        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, &viewport).unwrap();

        assert_eq!(result.real, -2.0);
        assert_eq!(result.imag, -1.0);
    }

    #[test]
    fn test_pixel_to_complex_bottom_right() {
        let viewport = Viewport::new(100.0, 0.0, 0.0, 400, 200).unwrap();

        let result = pixel_to_complex_coords(Point { x: 399, y: 199 }, &viewport).unwrap();

        assert_eq!(result.real, 1.99);
        assert_eq!(result.imag, 0.99);
    }

    #[test]
    fn test_odd_size_centre_is_between_pixels() {
        let viewport = Viewport::new(1.0, 0.0, 0.0, 3, 3).unwrap();

        let result = pixel_to_complex_coords(Point { x: 1, y: 1 }, &viewport).unwrap();

        assert_eq!(result.real, -0.5);
        assert_eq!(result.imag, -0.5);
    }

    #[test]
    fn test_complex_to_pixel_inverts_mapping() {
        let viewport = Viewport::new(256.0, 0.25, -0.5, 640, 480).unwrap();
        let c = pixel_to_complex(123.0, 45.0, &viewport);

        let (x, y) = complex_to_pixel(c, &viewport);

        assert_eq!(x, 123.0);
        assert_eq!(y, 45.0);
    }

    #[test]
    fn test_pixel_outside_viewport_fails() {
        let viewport = Viewport::new(100.0, 0.0, 0.0, 101, 101).unwrap();
        let point1 = Point { x: 150, y: 150 };
        let point2 = Point { x: -10, y: -10 };

        let result1 = pixel_to_complex_coords(point1, &viewport);
        let result2 = pixel_to_complex_coords(point2, &viewport);

        assert_eq!(
            result1,
            Err(PixelToComplexCoordsError::PointOutsideRect {
                point: point1,
                pixel_rect: viewport.pixel_rect()
            })
        );
        assert_eq!(
            result2,
            Err(PixelToComplexCoordsError::PointOutsideRect {
                point: point2,
                pixel_rect: viewport.pixel_rect()
            })
        );
    }
}
