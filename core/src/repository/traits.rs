use anyhow::Result;

use crate::model::store::TaskState;

/// How a load resolved. A fresh start is not an error: a missing or
/// unreadable data file resets the state instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loaded,
    FreshStart(String),
}

pub trait StateRepository {
    fn load(&self) -> Result<(TaskState, LoadStatus)>;
    fn save(&self, state: &TaskState) -> Result<()>;
}
