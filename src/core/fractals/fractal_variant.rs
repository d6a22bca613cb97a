use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalVariant {
    #[default]
    Mandelbrot,
    Julia,
    BurningShip,
    Mandelbar,
}

impl FractalVariant {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Julia,
        Self::BurningShip,
        Self::Mandelbar,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
            Self::BurningShip => "burning-ship",
            Self::Mandelbar => "mandelbar",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::BurningShip => "Burning Ship",
            Self::Mandelbar => "Mandelbar",
        }
    }

    /// Whether the iteration constant comes from outside rather than from
    /// the starting coordinate.
    #[must_use]
    pub const fn uses_external_constant(self) -> bool {
        matches!(self, Self::Julia)
    }
}

impl fmt::Display for FractalVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFractalVariantError {
    pub name: String,
}

impl fmt::Display for ParseFractalVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown fractal variant '{}' (expected mandelbrot, julia, burning-ship or mandelbar)",
            self.name
        )
    }
}

impl Error for ParseFractalVariantError {}

impl FromStr for FractalVariant {
    type Err = ParseFractalVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mandelbrot" => Ok(Self::Mandelbrot),
            "julia" => Ok(Self::Julia),
            "burning-ship" | "burning_ship" | "burningship" => Ok(Self::BurningShip),
            "mandelbar" | "tricorn" => Ok(Self::Mandelbar),
            _ => Err(ParseFractalVariantError {
                name: s.to_string(),
            }),
        }
    }
}
