pub mod easing;
pub mod viewport_transition;

pub use easing::ease_in_out_cubic;
pub use viewport_transition::{ViewportTransition, interpolate_viewport};
