use serde::{Deserialize, Serialize};
use std::fmt;

/// A single priority level. A configured scheme uses either labels
/// ("high", "medium", ...) or numeric ranks (1, 2, 3), never a mix.
///
/// Serialized untagged so data files hold the bare string or integer:
/// `{"Buy milk": "high"}` or `{"Buy milk": 3}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Priority {
    // Rank first: untagged deserialization tries variants in order and
    // a JSON number is never a valid Label.
    Rank(i64),
    Label(String),
}

impl Priority {
    /// Equality as the store sees it: labels compare case-insensitively,
    /// ranks numerically.
    pub fn matches(&self, other: &Priority) -> bool {
        match (self, other) {
            (Priority::Rank(a), Priority::Rank(b)) => a == b,
            (Priority::Label(a), Priority::Label(b)) => a.eq_ignore_ascii_case(b),
            _ => false,
        }
    }

    /// Display form for table cells: labels get their first letter
    /// upper-cased, ranks print as-is.
    pub fn title_case(&self) -> String {
        match self {
            Priority::Rank(n) => n.to_string(),
            Priority::Label(s) => {
                let mut chars = s.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            }
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Rank(n) => write!(f, "{}", n),
            Priority::Label(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Priority {
    fn from(s: &str) -> Self {
        Priority::Label(s.to_string())
    }
}

impl From<i64> for Priority {
    fn from(n: i64) -> Self {
        Priority::Rank(n)
    }
}
