pub mod colour_scheme;
pub mod palette;
pub mod palette_colour_map;
