pub mod view_history;

pub use view_history::{DEFAULT_HISTORY_CAPACITY, ViewHistory};
