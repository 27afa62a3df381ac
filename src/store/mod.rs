mod ledger;

pub(crate) use ledger::{Action, ExpenseQuery, Ledger, Outcome};

use anyhow::Result;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::db::{Database, BUDGETS_KEY, EXPENSES_KEY};
use crate::notify::{check_overspend, Alert};

/// Result of one dispatched action.
#[derive(Debug)]
pub(crate) struct Dispatched {
    pub(crate) outcome: Outcome,
    pub(crate) alert: Option<Alert>,
}

/// Owns the ledger and writes it back to storage after every change.
pub(crate) struct Store {
    db: Database,
    ledger: Ledger,
}

impl Store {
    /// Absent or unreadable blobs load as empty defaults.
    pub(crate) fn load(db: Database) -> Result<Self> {
        let ledger = Ledger {
            expenses: decode_or_default(&db, EXPENSES_KEY)?,
            budgets: decode_or_default(&db, BUDGETS_KEY)?,
        };
        tracing::info!(
            expenses = ledger.expenses.len(),
            budgets = ledger.budgets.len(),
            "loaded ledger"
        );
        Ok(Self { db, ledger })
    }

    pub(crate) fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Apply `action`, persist what changed, then run the overspend check
    /// for the category the action touched. A failed save leaves the
    /// in-memory ledger updated and is only logged.
    pub(crate) fn dispatch(&mut self, action: Action, today: NaiveDate) -> Dispatched {
        tracing::debug!(?action, "dispatch");
        let outcome = self.ledger.apply(action);

        if outcome.touches_expenses() {
            encode_and_put(&self.db, EXPENSES_KEY, &self.ledger.expenses);
        }
        if outcome.touches_budgets() {
            encode_and_put(&self.db, BUDGETS_KEY, &self.ledger.budgets);
        }

        let checked_category = match &outcome {
            Outcome::Added(id) | Outcome::Edited(id) => self
                .ledger
                .get(*id)
                .map(|e| e.category.as_str().to_string()),
            Outcome::BudgetSet { category, .. } => Some(category.clone()),
            Outcome::Deleted(_) | Outcome::NotFound(_) => None,
        };
        let alert = checked_category.and_then(|c| check_overspend(&self.ledger, &c, today));

        Dispatched { outcome, alert }
    }

    #[cfg(test)]
    pub(crate) fn into_database(self) -> Database {
        self.db
    }
}

fn decode_or_default<T: DeserializeOwned + Default>(db: &Database, key: &str) -> Result<T> {
    let Some(raw) = db.get_blob(key)? else {
        return Ok(T::default());
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "stored data unreadable, starting empty");
            Ok(T::default())
        }
    }
}

fn encode_and_put<T: Serialize + ?Sized>(db: &Database, key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(key, error = %e, "could not encode snapshot, not saved");
            return;
        }
    };
    match db.put_blob(key, &raw) {
        Ok(()) => tracing::debug!(key, bytes = raw.len(), "saved snapshot"),
        Err(e) => tracing::warn!(key, error = format!("{e:#}"), "could not write snapshot"),
    }
}
