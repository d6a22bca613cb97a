//! Background rendering for interactive front ends.
//!
//! A caller submits `RenderParams` whenever the view changes; the worker
//! renders only the newest request, abandons superseded ones mid-frame and
//! hands results to a `PresenterPort`.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use errors::render_error::RenderError;
pub use events::render_event::RenderEvent;
pub use ports::presenter_port::PresenterPort;
