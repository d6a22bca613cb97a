/// Number of recurrence updates applied before the orbit escaped.
///
/// A count equal to the iteration cap marks a point that never escaped.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IterationSample {
    pub count: u32,
}

impl IterationSample {
    #[must_use]
    pub fn is_interior(&self, max_iterations: u32) -> bool {
        self.count >= max_iterations
    }
}
