pub mod cli;
pub mod interactive;
pub mod navigation;
pub mod ports;
