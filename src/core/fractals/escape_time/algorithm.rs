use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_sample::IterationSample;
use crate::core::data::point::Point;
use crate::core::data::render_params::JuliaConstant;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::update_rule::{
    BurningShip, Julia, Mandelbar, Mandelbrot, UpdateRule,
};
use crate::core::fractals::fractal_variant::FractalVariant;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};
use std::marker::PhantomData;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts updates until `|z|` reaches 2 or the cap is hit.
///
/// The magnitude is tested before each update, so a seed already outside the
/// escape radius yields 0.
#[inline]
pub fn iterate_with<R: UpdateRule>(
    start: Complex,
    julia: JuliaConstant,
    max_iterations: u32,
) -> IterationSample {
    let c = R::constant(start, julia);
    let mut z = start;
    let mut count = 0;

    while count < max_iterations && z.magnitude_squared() < ESCAPE_RADIUS_SQUARED {
        z = R::step(z, c);
        count += 1;
    }

    IterationSample { count }
}

pub fn iterate(
    start_re: f64,
    start_im: f64,
    variant: FractalVariant,
    julia: JuliaConstant,
    max_iterations: u32,
) -> IterationSample {
    let start = Complex {
        real: start_re,
        imag: start_im,
    };

    match variant {
        FractalVariant::Mandelbrot => iterate_with::<Mandelbrot>(start, julia, max_iterations),
        FractalVariant::Julia => iterate_with::<Julia>(start, julia, max_iterations),
        FractalVariant::BurningShip => iterate_with::<BurningShip>(start, julia, max_iterations),
        FractalVariant::Mandelbar => iterate_with::<Mandelbar>(start, julia, max_iterations),
    }
}

/// Per-pixel escape-time computation over a viewport for one update rule.
#[derive(Debug)]
pub struct EscapeTimeAlgorithm<R: UpdateRule> {
    viewport: Viewport,
    julia: JuliaConstant,
    max_iterations: u32,
    rule: PhantomData<R>,
}

impl<R: UpdateRule> EscapeTimeAlgorithm<R> {
    #[must_use]
    pub fn new(viewport: Viewport, julia: JuliaConstant, max_iterations: u32) -> Self {
        Self {
            viewport,
            julia,
            max_iterations,
            rule: PhantomData,
        }
    }
}

impl<R: UpdateRule> FractalAlgorithm for EscapeTimeAlgorithm<R> {
    type Success = IterationSample;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let start = pixel_to_complex_coords(pixel, &self.viewport)?;

        Ok(iterate_with::<R>(start, self.julia, self.max_iterations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: u32 = 100;

    fn count(re: f64, im: f64, variant: FractalVariant) -> u32 {
        iterate(re, im, variant, JuliaConstant::default(), MAX).count
    }

    #[test]
    fn test_origin_never_escapes_for_start_seeded_variants() {
        assert_eq!(count(0.0, 0.0, FractalVariant::Mandelbrot), MAX);
        assert_eq!(count(0.0, 0.0, FractalVariant::BurningShip), MAX);
        assert_eq!(count(0.0, 0.0, FractalVariant::Mandelbar), MAX);
        assert_eq!(count(-1.0, 0.0, FractalVariant::Mandelbrot), MAX);
    }

    #[test]
    fn test_seed_outside_radius_escapes_immediately() {
        for &variant in FractalVariant::ALL {
            assert_eq!(count(2.0, 2.0, variant), 0, "{}", variant);
        }
    }

    #[test]
    fn test_mandelbrot_golden_counts() {
        assert_eq!(count(1.0, 1.0, FractalVariant::Mandelbrot), 1);
        assert_eq!(count(1.0, 0.0, FractalVariant::Mandelbrot), 1);
        assert_eq!(count(0.5, 0.0, FractalVariant::Mandelbrot), 4);
        assert_eq!(count(0.26, 0.0, FractalVariant::Mandelbrot), 29);
        assert_eq!(count(0.5, 0.5, FractalVariant::Mandelbrot), 4);
        assert_eq!(count(-1.75, -0.03, FractalVariant::Mandelbrot), 9);
        assert_eq!(count(0.3, 0.5, FractalVariant::Mandelbrot), MAX);
        assert_eq!(count(-0.5, 0.6, FractalVariant::Mandelbrot), MAX);
    }

    #[test]
    fn test_burning_ship_golden_counts() {
        assert_eq!(count(1.0, 1.0, FractalVariant::BurningShip), 1);
        assert_eq!(count(0.5, 0.5, FractalVariant::BurningShip), 3);
        assert_eq!(count(-1.75, -0.03, FractalVariant::BurningShip), 21);
        assert_eq!(count(0.3, 0.5, FractalVariant::BurningShip), 7);
        assert_eq!(count(-0.5, 0.6, FractalVariant::BurningShip), 2);
    }

    #[test]
    fn test_burning_ship_matches_abs_after_update_formulation() {
        // zx' = |zx^2 - zy^2 + cx|, zy' = |2 zx zy| + cy
        fn abs_after_update(cx: f64, cy: f64, max_iterations: u32) -> u32 {
            let (mut zx, mut zy) = (cx, cy);
            let mut count = 0;

            while count < max_iterations && zx * zx + zy * zy < ESCAPE_RADIUS_SQUARED {
                let next_x = (zx * zx - zy * zy + cx).abs();
                zy = (2.0 * zx * zy).abs() + cy;
                zx = next_x;
                count += 1;
            }

            count
        }

        for j in 0..=60 {
            for i in 0..=80 {
                let re = -2.4 + f64::from(i) * 0.0425;
                let im = -2.1 + f64::from(j) * 0.05;

                assert_eq!(
                    count(re, im, FractalVariant::BurningShip),
                    abs_after_update(re, im, MAX),
                    "({}, {})",
                    re,
                    im
                );
            }
        }
    }

    #[test]
    fn test_mandelbar_golden_counts() {
        assert_eq!(count(1.0, 1.0, FractalVariant::Mandelbar), 2);
        assert_eq!(count(0.5, 0.5, FractalVariant::Mandelbar), 6);
        assert_eq!(count(-1.75, -0.03, FractalVariant::Mandelbar), 9);
        assert_eq!(count(0.3, 0.5, FractalVariant::Mandelbar), MAX);
        assert_eq!(count(-0.5, 0.6, FractalVariant::Mandelbar), 2);
    }

    #[test]
    fn test_julia_golden_counts() {
        let julia = JuliaConstant { cx: -0.7, cy: 0.27015 };

        assert_eq!(iterate(0.0, 0.0, FractalVariant::Julia, julia, 100).count, 96);
        assert_eq!(iterate(0.0, 0.0, FractalVariant::Julia, julia, 1000).count, 96);
        assert_eq!(iterate(0.5, 0.5, FractalVariant::Julia, julia, 100).count, 4);
    }

    #[test]
    fn test_single_iteration_cap_yields_zero_or_one() {
        for &variant in FractalVariant::ALL {
            for &(re, im) in &[(0.0, 0.0), (2.0, 2.0), (1.0, 1.0), (-0.5, 0.6)] {
                let sample = iterate(re, im, variant, JuliaConstant::default(), 1);
                assert!(sample.count <= 1);
            }
        }
    }

    #[test]
    fn test_algorithm_maps_pixel_then_iterates() {
        let viewport = Viewport::new(100.0, 0.0, 0.0, 400, 400).unwrap();
        let algorithm =
            EscapeTimeAlgorithm::<Mandelbrot>::new(viewport, JuliaConstant::default(), MAX);

        // pixel (200, 200) is the origin, pixel (300, 200) is 1 + 0i
        assert_eq!(
            algorithm.compute(Point { x: 200, y: 200 }),
            Ok(IterationSample { count: MAX })
        );
        assert_eq!(
            algorithm.compute(Point { x: 300, y: 200 }),
            Ok(IterationSample { count: 1 })
        );
    }

    #[test]
    fn test_algorithm_rejects_pixel_outside_viewport() {
        let viewport = Viewport::new(100.0, 0.0, 0.0, 4, 4).unwrap();
        let algorithm = EscapeTimeAlgorithm::<Julia>::new(viewport, JuliaConstant::default(), MAX);

        assert!(matches!(
            algorithm.compute(Point { x: 4, y: 0 }),
            Err(PixelToComplexCoordsError::PointOutsideRect { .. })
        ));
    }
}
