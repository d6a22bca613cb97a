use crate::core::data::point::Point;
use std::error::Error;

/// Computes one value per pixel. Implementations hold everything they need
/// to place the pixel, so `compute` is pure.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
