use crate::core::data::colour::Colour;
use std::error::Error;

pub type ColourMapError = Box<dyn Error + Send + Sync>;

pub trait ColourMap<T> {
    fn map(&self, value: T) -> Result<Colour, ColourMapError>;

    fn display_name(&self) -> &str;
}
