use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::colour::colour_scheme::ColourScheme;
use crate::core::colour::palette::colorize;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_sample::IterationSample;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum PaletteColourMapError {
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}

impl fmt::Display for PaletteColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iterations {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
        }
    }
}

impl Error for PaletteColourMapError {}

#[derive(Debug, Clone, Copy)]
pub struct PaletteColourMap {
    scheme: ColourScheme,
    max_iterations: u32,
}

impl PaletteColourMap {
    #[must_use]
    pub fn new(scheme: ColourScheme, max_iterations: u32) -> Self {
        Self {
            scheme,
            max_iterations,
        }
    }

    #[must_use]
    pub fn scheme(&self) -> ColourScheme {
        self.scheme
    }
}

impl ColourMap<IterationSample> for PaletteColourMap {
    fn map(&self, sample: IterationSample) -> Result<Colour, ColourMapError> {
        if sample.count > self.max_iterations {
            return Err(Box::new(PaletteColourMapError::IterationsExceedMax {
                iterations: sample.count,
                max_iterations: self.max_iterations,
            }));
        }

        Ok(colorize(sample.count, self.max_iterations, self.scheme))
    }

    fn display_name(&self) -> &str {
        self.scheme.display_name()
    }
}
