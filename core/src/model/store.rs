use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::PriorityScheme;
use crate::model::outcome::{AddOutcome, ClearOutcome, CompleteOutcome, RemoveOutcome, Selection};
use crate::model::priority::Priority;

/// Task name to priority, insertion order preserved.
pub type TaskMap = IndexMap<String, Priority>;

/// Serializable snapshot of the four task maps. Key names match the
/// layout of existing data files.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TaskState {
    #[serde(default)]
    pub to_do: TaskMap,
    #[serde(default)]
    pub done: TaskMap,
    #[serde(rename = "daily added tasks", default)]
    pub daily_added: TaskMap,
    #[serde(rename = "daily completed tasks", default)]
    pub daily_completed: TaskMap,
}

/// One of the four lists, for read access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Todo,
    Done,
    DailyAdded,
    DailyCompleted,
}

/// The in-memory task collection.
///
/// Names are unique case-insensitively across the to-do and done lists;
/// the casing used at insertion is the one stored. The daily maps mirror
/// the session's additions and completions and feed only the report.
#[derive(Debug, Clone)]
pub struct TaskStore {
    scheme: PriorityScheme,
    to_do: TaskMap,
    done: TaskMap,
    daily_added: TaskMap,
    daily_completed: TaskMap,
}

fn find_key(map: &TaskMap, name: &str) -> Option<String> {
    map.keys().find(|k| k.eq_ignore_ascii_case(name)).cloned()
}

impl TaskStore {
    pub fn new(scheme: PriorityScheme) -> Self {
        Self::from_state(TaskState::default(), scheme)
    }

    pub fn from_state(state: TaskState, scheme: PriorityScheme) -> Self {
        Self {
            scheme,
            to_do: state.to_do,
            done: state.done,
            daily_added: state.daily_added,
            daily_completed: state.daily_completed,
        }
    }

    /// Snapshot for persistence.
    pub fn state(&self) -> TaskState {
        TaskState {
            to_do: self.to_do.clone(),
            done: self.done.clone(),
            daily_added: self.daily_added.clone(),
            daily_completed: self.daily_completed.clone(),
        }
    }

    pub fn scheme(&self) -> &PriorityScheme {
        &self.scheme
    }

    /// Inserts a new to-do task. Without an explicit priority the scheme
    /// default applies. Duplicate names (any casing, either list) and
    /// priorities outside the scheme are rejected as outcomes.
    pub fn add(&mut self, name: &str, priority: Option<Priority>) -> AddOutcome {
        let priority = priority.unwrap_or_else(|| self.scheme.default_priority().clone());
        if let Some(existing) =
            find_key(&self.to_do, name).or_else(|| find_key(&self.done, name))
        {
            return AddOutcome::AlreadyPresent { existing };
        }
        if !self.scheme.contains(&priority) {
            return AddOutcome::InvalidPriority {
                name: name.to_string(),
                priority,
                levels: self.scheme.describe_levels(),
            };
        }
        self.to_do.insert(name.to_string(), priority.clone());
        self.daily_added.insert(name.to_string(), priority.clone());
        AddOutcome::Added { name: name.to_string(), priority }
    }

    /// Deletes a pending task, including its daily-added entry.
    pub fn remove(&mut self, name: &str) -> RemoveOutcome {
        match find_key(&self.to_do, name) {
            Some(original) => {
                self.to_do.shift_remove(&original);
                self.daily_added.shift_remove(&original);
                RemoveOutcome::Removed { name: original }
            }
            None => RemoveOutcome::NotFound { name: name.to_string() },
        }
    }

    /// Moves a pending task to the done list and records the completion
    /// in the daily ledger.
    pub fn complete(&mut self, name: &str) -> CompleteOutcome {
        if let Some(original) = find_key(&self.to_do, name) {
            if let Some((key, priority)) = self.to_do.shift_remove_entry(&original) {
                self.done.insert(key.clone(), priority.clone());
                self.daily_completed.insert(key.clone(), priority);
                return CompleteOutcome::Completed { name: key };
            }
        }
        if let Some(original) = find_key(&self.done, name) {
            return CompleteOutcome::AlreadyDone { name: original };
        }
        CompleteOutcome::NotFound { name: name.to_string() }
    }

    /// Empties the selected list(s) together with their daily ledgers.
    /// A selection that is entirely empty is left untouched.
    pub fn clear(&mut self, which: Selection) -> ClearOutcome {
        let empty = match which {
            Selection::Todo => self.to_do.is_empty(),
            Selection::Done => self.done.is_empty(),
            Selection::Both => self.to_do.is_empty() && self.done.is_empty(),
        };
        if empty {
            return ClearOutcome::AlreadyEmpty { which };
        }
        if matches!(which, Selection::Todo | Selection::Both) {
            self.to_do.clear();
            self.daily_added.clear();
        }
        if matches!(which, Selection::Done | Selection::Both) {
            self.done.clear();
            self.daily_completed.clear();
        }
        ClearOutcome::Cleared { which }
    }

    /// Entries of one list, sorted by the scheme order. The sort is
    /// stable, so equal priorities keep insertion order.
    pub fn entries(&self, kind: ListKind) -> Vec<(String, Priority)> {
        let map = match kind {
            ListKind::Todo => &self.to_do,
            ListKind::Done => &self.done,
            ListKind::DailyAdded => &self.daily_added,
            ListKind::DailyCompleted => &self.daily_completed,
        };
        let mut entries: Vec<(String, Priority)> =
            map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        entries.sort_by_key(|(_, p)| self.scheme.sort_key(p));
        entries
    }

    pub fn daily_ledger_empty(&self) -> bool {
        self.daily_added.is_empty() && self.daily_completed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortOrder;

    fn store() -> TaskStore {
        TaskStore::new(PriorityScheme::default())
    }

    fn names(entries: &[(String, Priority)]) -> Vec<&str> {
        entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    #[test]
    fn test_add_uses_default_priority() {
        let mut store = store();
        let outcome = store.add("Buy milk", None);
        assert_eq!(
            outcome,
            AddOutcome::Added {
                name: "Buy milk".to_string(),
                priority: "medium".into(),
            }
        );
        assert_eq!(store.entries(ListKind::Todo).len(), 1);
        assert_eq!(store.entries(ListKind::DailyAdded).len(), 1);
    }

    #[test]
    fn test_add_twice_is_a_noop_any_casing() {
        let mut store = store();
        store.add("Buy milk", None);
        let outcome = store.add("BUY MILK", Some("high".into()));
        assert_eq!(
            outcome,
            AddOutcome::AlreadyPresent { existing: "Buy milk".to_string() }
        );
        let todo = store.entries(ListKind::Todo);
        assert_eq!(todo.len(), 1);
        assert_eq!(todo[0].1, Priority::from("medium"));
    }

    #[test]
    fn test_add_rejects_name_held_by_done_task() {
        let mut store = store();
        store.add("Ship release", None);
        store.complete("Ship release");
        let outcome = store.add("ship release", None);
        assert_eq!(
            outcome,
            AddOutcome::AlreadyPresent { existing: "Ship release".to_string() }
        );
        assert!(store.entries(ListKind::Todo).is_empty());
    }

    #[test]
    fn test_add_rejects_invalid_priority() {
        let mut store = store();
        let outcome = store.add("Buy milk", Some("urgent".into()));
        assert!(matches!(outcome, AddOutcome::InvalidPriority { .. }));
        assert!(store.entries(ListKind::Todo).is_empty());
        assert!(store.entries(ListKind::DailyAdded).is_empty());
    }

    #[test]
    fn test_priority_accepts_any_casing() {
        let mut store = store();
        let outcome = store.add("Buy milk", Some("HIGH".into()));
        assert!(matches!(outcome, AddOutcome::Added { .. }));
    }

    #[test]
    fn test_remove_clears_daily_entry_too() {
        let mut store = store();
        store.add("Buy milk", None);
        let outcome = store.remove("buy MILK");
        assert_eq!(outcome, RemoveOutcome::Removed { name: "Buy milk".to_string() });
        assert!(store.entries(ListKind::Todo).is_empty());
        assert!(store.entries(ListKind::DailyAdded).is_empty());
    }

    #[test]
    fn test_remove_unknown_reports_not_found() {
        let mut store = store();
        let outcome = store.remove("Buy milk");
        assert_eq!(outcome, RemoveOutcome::NotFound { name: "Buy milk".to_string() });
    }

    #[test]
    fn test_complete_moves_exactly_once() {
        let mut store = store();
        store.add("Buy milk", Some("high".into()));
        let outcome = store.complete("buy milk");
        assert_eq!(outcome, CompleteOutcome::Completed { name: "Buy milk".to_string() });

        assert!(store.entries(ListKind::Todo).is_empty());
        let done = store.entries(ListKind::Done);
        assert_eq!(done, vec![("Buy milk".to_string(), "high".into())]);
        assert_eq!(store.entries(ListKind::DailyCompleted).len(), 1);

        // Second completion finds it in the done list
        let outcome = store.complete("Buy milk");
        assert_eq!(outcome, CompleteOutcome::AlreadyDone { name: "Buy milk".to_string() });
        assert_eq!(store.entries(ListKind::Done).len(), 1);
        assert_eq!(store.entries(ListKind::DailyCompleted).len(), 1);
    }

    #[test]
    fn test_complete_unknown_reports_not_found() {
        let mut store = store();
        let outcome = store.complete("Buy milk");
        assert_eq!(outcome, CompleteOutcome::NotFound { name: "Buy milk".to_string() });
    }

    #[test]
    fn test_clear_empty_reports_already_empty() {
        let mut store = store();
        assert_eq!(
            store.clear(Selection::Both),
            ClearOutcome::AlreadyEmpty { which: Selection::Both }
        );
        store.add("Buy milk", None);
        assert_eq!(
            store.clear(Selection::Done),
            ClearOutcome::AlreadyEmpty { which: Selection::Done }
        );
        // The untouched selection kept its contents
        assert_eq!(store.entries(ListKind::Todo).len(), 1);
    }

    #[test]
    fn test_clear_both_with_one_side_empty_still_clears() {
        let mut store = store();
        store.add("Buy milk", None);
        assert_eq!(
            store.clear(Selection::Both),
            ClearOutcome::Cleared { which: Selection::Both }
        );
        assert!(store.entries(ListKind::Todo).is_empty());
        assert!(store.entries(ListKind::DailyAdded).is_empty());
    }

    #[test]
    fn test_clear_todo_leaves_done_alone() {
        let mut store = store();
        store.add("Buy milk", None);
        store.add("Ship release", None);
        store.complete("Ship release");

        store.clear(Selection::Todo);
        assert!(store.entries(ListKind::Todo).is_empty());
        assert!(store.entries(ListKind::DailyAdded).is_empty());
        assert_eq!(store.entries(ListKind::Done).len(), 1);
        assert_eq!(store.entries(ListKind::DailyCompleted).len(), 1);
    }

    #[test]
    fn test_entries_sorted_by_scheme_order() {
        let mut store = store();
        store.add("c", Some("low".into()));
        store.add("a", Some("high".into()));
        store.add("b", Some("medium".into()));
        assert_eq!(names(&store.entries(ListKind::Todo)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_entries_descending_order() {
        let scheme = PriorityScheme::new(
            vec!["high".into(), "medium".into(), "low".into()],
            "medium".into(),
            SortOrder::Descending,
        )
        .unwrap();
        let mut store = TaskStore::new(scheme);
        store.add("a", Some("high".into()));
        store.add("c", Some("low".into()));
        store.add("b", Some("medium".into()));
        assert_eq!(names(&store.entries(ListKind::Todo)), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_equal_priorities_keep_insertion_order() {
        let mut store = store();
        store.add("first", None);
        store.add("second", None);
        store.add("third", None);
        assert_eq!(
            names(&store.entries(ListKind::Todo)),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn test_state_round_trip() {
        let mut store = store();
        store.add("Buy milk", Some("high".into()));
        store.add("Ship release", None);
        store.complete("Ship release");

        let restored = TaskStore::from_state(store.state(), PriorityScheme::default());
        assert_eq!(restored.state(), store.state());
    }
}
