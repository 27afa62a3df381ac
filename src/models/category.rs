use serde::{Deserialize, Serialize};

use super::Expense;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub(crate) enum Category {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Bills,
    Health,
    Other,
}

impl Category {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Bills => "Bills",
            Self::Health => "Health",
            Self::Other => "Other",
        }
    }

    /// Strict, case-insensitive lookup. Used where input must name a known category.
    pub(crate) fn find(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str().to_lowercase() == lower)
    }

    /// Lenient parse for stored data: anything unrecognised becomes `Other`.
    pub(crate) fn parse(s: &str) -> Self {
        Self::find(s).unwrap_or(Self::Other)
    }

    pub(crate) fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Transport,
            Self::Shopping,
            Self::Entertainment,
            Self::Bills,
            Self::Health,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.as_str().to_string()
    }
}

/// Category selector for the expense list. `All` passes every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub(crate) fn matches(&self, expense: &Expense) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => expense.category == *category,
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("all") || s.trim().is_empty() {
            return Some(Self::All);
        }
        Category::find(s).map(Self::Only)
    }

    /// Cycle All -> first category -> ... -> last category -> All.
    pub(crate) fn next(&self) -> Self {
        let all = Category::all();
        match self {
            Self::All => Self::Only(all[0]),
            Self::Only(current) => {
                let idx = all.iter().position(|c| c == current).unwrap_or(0);
                all.get(idx + 1).copied().map_or(Self::All, Self::Only)
            }
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Only(category) => write!(f, "{category}"),
        }
    }
}
