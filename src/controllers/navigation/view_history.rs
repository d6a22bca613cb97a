use crate::core::data::render_params::RenderParams;
use std::collections::VecDeque;

pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Bounded list of previously rendered views, oldest first.
///
/// Owned by the front end, never by the renderer. Pushing onto a full
/// history evicts the oldest entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewHistory {
    entries: VecDeque<RenderParams>,
    capacity: usize,
}

impl ViewHistory {
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);

        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records `params`, returning the entry evicted to make room, if any.
    pub fn push(&mut self, params: RenderParams) -> Option<RenderParams> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };

        self.entries.push_back(params);
        evicted
    }

    /// Removes and returns the newest entry.
    pub fn pop(&mut self) -> Option<RenderParams> {
        self.entries.pop_back()
    }

    /// Entry at `index`, counted from the oldest. The entry stays recorded.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RenderParams> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn latest(&self) -> Option<&RenderParams> {
        self.entries.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenderParams> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for ViewHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
