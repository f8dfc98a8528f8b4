pub mod file;
pub mod traits;

// Re-export
pub use file::{default_data_dir, FileStateRepository};
pub use traits::{LoadStatus, StateRepository};
