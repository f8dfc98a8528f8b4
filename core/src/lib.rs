pub mod config;
pub mod model;
pub mod report;
pub mod reporter;
pub mod repository;
pub mod service;

pub use config::{PriorityScheme, SortOrder};
pub use model::outcome::{AddOutcome, ClearOutcome, CompleteOutcome, RemoveOutcome, Selection};
pub use model::priority::Priority;
pub use model::store::{ListKind, TaskState, TaskStore};
pub use report::{format_task_list, ReportContent};
pub use reporter::{Reporter, Severity};
pub use repository::{default_data_dir, FileStateRepository, LoadStatus, StateRepository};
pub use service::task_service::TaskService;
