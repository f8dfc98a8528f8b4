use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;

use crate::config::PriorityScheme;
use crate::model::outcome::{AddOutcome, ClearOutcome, CompleteOutcome, RemoveOutcome, Selection};
use crate::model::priority::Priority;
use crate::model::store::{ListKind, TaskStore};
use crate::report::{self, ReportContent};
use crate::repository::{LoadStatus, StateRepository};

/// Orchestrates the store against a persistence backend. Domain
/// conditions come back as outcome values; only I/O can fail.
pub struct TaskService<R: StateRepository> {
    store: TaskStore,
    repo: R,
}

impl<R: StateRepository> TaskService<R> {
    pub fn load(repo: R, scheme: PriorityScheme) -> Result<(Self, LoadStatus)> {
        let (state, status) = repo.load()?;
        let store = TaskStore::from_state(state, scheme);
        Ok((Self { store, repo }, status))
    }

    pub fn add(&mut self, name: &str, priority: Option<Priority>) -> AddOutcome {
        self.store.add(name, priority)
    }

    pub fn remove(&mut self, name: &str) -> RemoveOutcome {
        self.store.remove(name)
    }

    pub fn complete(&mut self, name: &str) -> CompleteOutcome {
        self.store.complete(name)
    }

    pub fn clear(&mut self, which: Selection) -> ClearOutcome {
        self.store.clear(which)
    }

    pub fn entries(&self, kind: ListKind) -> Vec<(String, Priority)> {
        self.store.entries(kind)
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn save(&self) -> Result<()> {
        self.repo.save(&self.store.state())
    }

    /// Writes today's report. None means both daily ledgers were empty
    /// and no file was created.
    pub fn write_report(&self, dir: &Path, content: ReportContent) -> Result<Option<PathBuf>> {
        report::write_report(&self.store, dir, content, Local::now().date_naive())
    }
}
