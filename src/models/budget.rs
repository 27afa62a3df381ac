use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly spending ceilings keyed by category name.
///
/// Keys are free text: the UI only offers known categories, but nothing here
/// ties an entry to the category set. Entries are created or overwritten,
/// never removed one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct Budgets(BTreeMap<String, Decimal>);

impl Budgets {
    pub(crate) fn set(&mut self, category: impl Into<String>, limit: Decimal) {
        self.0.insert(category.into(), limit);
    }

    pub(crate) fn limit_for(&self, category: &str) -> Option<Decimal> {
        self.0.get(category).copied()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.0.iter().map(|(name, limit)| (name.as_str(), *limit))
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
