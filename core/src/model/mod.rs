pub mod outcome;
pub mod priority;
pub mod store;

// Re-export
pub use outcome::{AddOutcome, ClearOutcome, CompleteOutcome, RemoveOutcome, Selection};
pub use priority::Priority;
pub use store::{ListKind, TaskState, TaskStore};
