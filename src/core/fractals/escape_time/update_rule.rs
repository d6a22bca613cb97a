use crate::core::data::complex::Complex;
use crate::core::data::render_params::JuliaConstant;

/// One step of an escape-time recurrence.
///
/// Implementations are zero-sized so a renderer picks the rule once and the
/// per-pixel loop is monomorphised with no variant branch.
pub trait UpdateRule: Copy + Send + Sync {
    /// Constant added on every step for an orbit seeded at `start`.
    fn constant(start: Complex, julia: JuliaConstant) -> Complex;

    fn step(z: Complex, c: Complex) -> Complex;
}

#[derive(Debug, Copy, Clone, Default)]
pub struct Mandelbrot;

#[derive(Debug, Copy, Clone, Default)]
pub struct Julia;

#[derive(Debug, Copy, Clone, Default)]
pub struct BurningShip;

#[derive(Debug, Copy, Clone, Default)]
pub struct Mandelbar;

impl UpdateRule for Mandelbrot {
    #[inline]
    fn constant(start: Complex, _: JuliaConstant) -> Complex {
        start
    }

    #[inline]
    fn step(z: Complex, c: Complex) -> Complex {
        z * z + c
    }
}

impl UpdateRule for Julia {
    #[inline]
    fn constant(_: Complex, julia: JuliaConstant) -> Complex {
        Complex {
            real: julia.cx,
            imag: julia.cy,
        }
    }

    #[inline]
    fn step(z: Complex, c: Complex) -> Complex {
        z * z + c
    }
}

impl UpdateRule for BurningShip {
    #[inline]
    fn constant(start: Complex, _: JuliaConstant) -> Complex {
        start
    }

    // Folding before squaring gives the same magnitudes as folding after
    // the add, so escape counts match either formulation.
    #[inline]
    fn step(z: Complex, c: Complex) -> Complex {
        let folded = z.abs_parts();
        folded * folded + c
    }
}

impl UpdateRule for Mandelbar {
    #[inline]
    fn constant(start: Complex, _: JuliaConstant) -> Complex {
        start
    }

    #[inline]
    fn step(z: Complex, c: Complex) -> Complex {
        let conjugate = z.conj();
        conjugate * conjugate + c
    }
}
