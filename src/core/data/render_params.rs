use crate::core::colour::colour_scheme::ColourScheme;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::fractal_variant::FractalVariant;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex;
use std::error::Error;
use std::fmt;

pub const MIN_ITERATIONS: u32 = 10;
pub const MAX_ITERATIONS: u32 = 1000;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Brings a requested iteration cap into the range the front ends offer.
#[must_use]
pub fn clamp_max_iterations(max_iterations: u32) -> u32 {
    max_iterations.clamp(MIN_ITERATIONS, MAX_ITERATIONS)
}

/// Constant added on every Julia step. Ignored by the other variants.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JuliaConstant {
    pub cx: f64,
    pub cy: f64,
}

impl Default for JuliaConstant {
    fn default() -> Self {
        Self {
            cx: -0.7,
            cy: 0.27015,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RenderParamsError {
    InvalidIterationCap { max_iterations: u32 },
    NonFiniteInput { field: &'static str },
    Viewport(ViewportError),
}

impl fmt::Display for RenderParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIterationCap { max_iterations } => {
                write!(f, "iteration cap must be positive: {}", max_iterations)
            }
            Self::NonFiniteInput { field } => write!(f, "{} must be finite", field),
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
        }
    }
}

impl Error for RenderParamsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ViewportError> for RenderParamsError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

/// Everything one render pass reads. Immutable once built.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderParams {
    viewport: Viewport,
    variant: FractalVariant,
    julia_constant: JuliaConstant,
    max_iterations: u32,
    colour_scheme: ColourScheme,
}

impl RenderParams {
    pub fn new(
        viewport: Viewport,
        variant: FractalVariant,
        julia_constant: JuliaConstant,
        max_iterations: u32,
        colour_scheme: ColourScheme,
    ) -> Result<Self, RenderParamsError> {
        if max_iterations == 0 {
            return Err(RenderParamsError::InvalidIterationCap { max_iterations });
        }
        if !julia_constant.cx.is_finite() {
            return Err(RenderParamsError::NonFiniteInput { field: "julia_cx" });
        }
        if !julia_constant.cy.is_finite() {
            return Err(RenderParamsError::NonFiniteInput { field: "julia_cy" });
        }

        Ok(Self {
            viewport,
            variant,
            julia_constant,
            max_iterations,
            colour_scheme,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn variant(&self) -> FractalVariant {
        self.variant
    }

    #[must_use]
    pub fn julia_constant(&self) -> JuliaConstant {
        self.julia_constant
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn colour_scheme(&self) -> ColourScheme {
        self.colour_scheme
    }

    #[must_use]
    pub fn with_viewport(&self, viewport: Viewport) -> Self {
        Self { viewport, ..*self }
    }

    #[must_use]
    pub fn with_colour_scheme(&self, colour_scheme: ColourScheme) -> Self {
        Self {
            colour_scheme,
            ..*self
        }
    }

    /// Switches to the Julia set whose constant lies under pixel `(x, y)`.
    ///
    /// Only a Mandelbrot view picks a constant; other variants return
    /// `self` unchanged.
    #[must_use]
    pub fn with_julia_from_pixel(&self, x: f64, y: f64) -> Self {
        if self.variant != FractalVariant::Mandelbrot {
            return *self;
        }

        let c = pixel_to_complex(x, y, &self.viewport);
        if !c.is_finite() {
            return *self;
        }

        Self {
            variant: FractalVariant::Julia,
            julia_constant: JuliaConstant {
                cx: c.real,
                cy: c.imag,
            },
            ..*self
        }
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            variant: FractalVariant::default(),
            julia_constant: JuliaConstant::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_scheme: ColourScheme::default(),
        }
    }
}
