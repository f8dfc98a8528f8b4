use std::fmt;

use crate::model::priority::Priority;
use crate::reporter::Severity;

/// Which list(s) an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Todo,
    Done,
    Both,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added { name: String, priority: Priority },
    /// The name is already taken (possibly under different casing, and
    /// possibly by a completed task). Carries the stored casing.
    AlreadyPresent { existing: String },
    InvalidPriority { name: String, priority: Priority, levels: String },
}

impl AddOutcome {
    pub fn severity(&self) -> Severity {
        match self {
            AddOutcome::Added { .. } => Severity::Success,
            AddOutcome::AlreadyPresent { .. } => Severity::Info,
            AddOutcome::InvalidPriority { .. } => Severity::Error,
        }
    }
}

impl fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddOutcome::Added { name, priority } => {
                write!(f, "{} (Priority: {}) added successfully.", name, priority)
            }
            AddOutcome::AlreadyPresent { existing } => {
                write!(f, "{} is already in the to-do list.", existing)
            }
            AddOutcome::InvalidPriority { name, priority, levels } => write!(
                f,
                "{} (Priority: {}) has an invalid priority. Available priorities are: {}.",
                name, priority, levels
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome {
    Removed { name: String },
    NotFound { name: String },
}

impl RemoveOutcome {
    pub fn severity(&self) -> Severity {
        match self {
            RemoveOutcome::Removed { .. } => Severity::Success,
            RemoveOutcome::NotFound { .. } => Severity::Error,
        }
    }
}

impl fmt::Display for RemoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoveOutcome::Removed { name } => write!(f, "{} removed successfully.", name),
            RemoveOutcome::NotFound { name } => {
                write!(f, "{} not found in the to-do list.", name)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompleteOutcome {
    Completed { name: String },
    AlreadyDone { name: String },
    NotFound { name: String },
}

impl CompleteOutcome {
    pub fn severity(&self) -> Severity {
        match self {
            CompleteOutcome::Completed { .. } => Severity::Success,
            CompleteOutcome::AlreadyDone { .. } => Severity::Info,
            CompleteOutcome::NotFound { .. } => Severity::Error,
        }
    }
}

impl fmt::Display for CompleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompleteOutcome::Completed { name } => write!(f, "{} marked as done.", name),
            CompleteOutcome::AlreadyDone { name } => write!(f, "{} already done.", name),
            CompleteOutcome::NotFound { name } => write!(f, "{} not in the to-do list.", name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared { which: Selection },
    AlreadyEmpty { which: Selection },
}

impl ClearOutcome {
    pub fn severity(&self) -> Severity {
        match self {
            ClearOutcome::Cleared { .. } => Severity::Success,
            ClearOutcome::AlreadyEmpty { .. } => Severity::Info,
        }
    }
}

impl fmt::Display for ClearOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClearOutcome::Cleared { which: Selection::Todo } => {
                write!(f, "To-do list cleared successfully.")
            }
            ClearOutcome::Cleared { which: Selection::Done } => {
                write!(f, "Done list cleared successfully.")
            }
            ClearOutcome::Cleared { which: Selection::Both } => {
                write!(f, "Both lists cleared successfully.")
            }
            ClearOutcome::AlreadyEmpty { which: Selection::Todo } => {
                write!(f, "To-do list is already empty.")
            }
            ClearOutcome::AlreadyEmpty { which: Selection::Done } => {
                write!(f, "Done list is already empty.")
            }
            ClearOutcome::AlreadyEmpty { which: Selection::Both } => {
                write!(f, "Both lists are already empty.")
            }
        }
    }
}
