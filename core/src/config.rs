use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::priority::Priority;

/// Direction of list output relative to the configured level order.
/// Ascending means index order (the first configured level prints first).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Ascending
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "ascending"),
            SortOrder::Descending => write!(f, "descending"),
        }
    }
}

/// On-disk shape of config.json. Validation happens in
/// `PriorityScheme::new`, so deserialization stays dumb.
#[derive(Deserialize)]
struct SchemeFile {
    levels: Vec<Priority>,
    #[serde(default)]
    default: Option<Priority>,
    #[serde(default)]
    order: SortOrder,
}

/// The configured, ordered set of valid priority levels plus the default
/// assigned when a task is added without one.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PriorityScheme {
    levels: Vec<Priority>,
    default: Priority,
    order: SortOrder,
}

impl PriorityScheme {
    pub fn new(levels: Vec<Priority>, default: Priority, order: SortOrder) -> Result<Self> {
        if levels.is_empty() {
            bail!("priority scheme needs at least one level");
        }
        let all_labels = levels.iter().all(|l| matches!(l, Priority::Label(_)));
        let all_ranks = levels.iter().all(|l| matches!(l, Priority::Rank(_)));
        if !all_labels && !all_ranks {
            bail!("priority levels must be all strings or all integers, not a mix");
        }
        for (i, level) in levels.iter().enumerate() {
            if levels[..i].iter().any(|seen| seen.matches(level)) {
                bail!("duplicate priority level: {}", level);
            }
        }
        if !levels.iter().any(|l| l.matches(&default)) {
            bail!("default priority {} is not one of the configured levels", default);
        }
        Ok(Self { levels, default, order })
    }

    /// Reads a scheme from config.json. A missing file yields the default
    /// scheme; an unreadable or invalid one is an error the caller can
    /// report and recover from.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let file =
            File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let raw: SchemeFile = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing {}", path.display()))?;
        let default = raw
            .default
            .or_else(|| raw.levels.first().cloned())
            .ok_or_else(|| anyhow!("priority scheme needs at least one level"))?;
        Self::new(raw.levels, default, raw.order)
    }

    pub fn levels(&self) -> &[Priority] {
        &self.levels
    }

    pub fn default_priority(&self) -> &Priority {
        &self.default
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn contains(&self, priority: &Priority) -> bool {
        self.levels.iter().any(|l| l.matches(priority))
    }

    /// Position of a priority in the configured order, if valid.
    pub fn rank_of(&self, priority: &Priority) -> Option<usize> {
        self.levels.iter().position(|l| l.matches(priority))
    }

    /// Sort key honoring the configured direction. Priorities outside the
    /// scheme (possible in hand-edited data files) sort last.
    pub fn sort_key(&self, priority: &Priority) -> usize {
        match self.rank_of(priority) {
            Some(rank) => match self.order {
                SortOrder::Ascending => rank,
                SortOrder::Descending => self.levels.len() - 1 - rank,
            },
            None => usize::MAX,
        }
    }

    /// Interprets raw CLI input in terms of the scheme: numeric input on a
    /// rank scheme becomes a rank, everything else a label.
    pub fn parse_priority(&self, input: &str) -> Priority {
        if matches!(self.levels.first(), Some(Priority::Rank(_))) {
            if let Ok(n) = input.trim().parse::<i64>() {
                return Priority::Rank(n);
            }
        }
        Priority::Label(input.to_string())
    }

    pub fn describe_levels(&self) -> String {
        self.levels
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for PriorityScheme {
    fn default() -> Self {
        Self {
            levels: vec!["high".into(), "medium".into(), "low".into()],
            default: "medium".into(),
            order: SortOrder::Ascending,
        }
    }
}
