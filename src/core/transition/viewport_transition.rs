use crate::core::data::viewport::Viewport;
use crate::core::transition::easing::ease_in_out_cubic;
use std::time::Duration;

/// Viewport between `from` and `to` at eased `progress` in `[0, 1]`.
///
/// Zoom moves geometrically so every frame zooms by the same factor; the
/// offset moves linearly. The pixel size is always taken from `to`.
#[must_use]
pub fn interpolate_viewport(from: &Viewport, to: &Viewport, progress: f64) -> Viewport {
    let eased = ease_in_out_cubic(progress);

    if eased >= 1.0 {
        return *to;
    }

    let zoom = if eased == 0.0 {
        from.zoom()
    } else {
        let log_from = from.zoom().ln();
        let log_to = to.zoom().ln();
        (log_from + (log_to - log_from) * eased).exp()
    };
    let offset_x = from.offset_x() + (to.offset_x() - from.offset_x()) * eased;
    let offset_y = from.offset_y() + (to.offset_y() - from.offset_y()) * eased;

    Viewport::new(zoom, offset_x, offset_y, to.width(), to.height()).unwrap_or(*to)
}

/// An animated move between two viewports, sampled by elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransition {
    from: Viewport,
    to: Viewport,
    duration: Duration,
}

impl ViewportTransition {
    #[must_use]
    pub fn new(from: Viewport, to: Viewport, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    #[must_use]
    pub fn from(&self) -> Viewport {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> Viewport {
        self.to
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }

        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn viewport_at(&self, elapsed: Duration) -> Viewport {
        interpolate_viewport(&self.from, &self.to, self.progress(elapsed))
    }

    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}
