use crate::controllers::interactive::events::render_event::RenderEvent;

/// Receives finished frames and render failures from the worker thread.
pub trait PresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
