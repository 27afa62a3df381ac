use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{Budgets, CategoryFilter, Expense, ExpenseDraft};

/// Every state change goes through one of these.
#[derive(Debug, Clone)]
pub(crate) enum Action {
    Add(ExpenseDraft),
    Edit { id: Uuid, draft: ExpenseDraft },
    Delete(Uuid),
    SetBudget { category: String, limit: Decimal },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
    Added(Uuid),
    Edited(Uuid),
    Deleted(Expense),
    BudgetSet { category: String, limit: Decimal },
    NotFound(Uuid),
}

impl Outcome {
    /// Whether the expense collection changed and must be written back.
    pub(crate) fn touches_expenses(&self) -> bool {
        matches!(self, Self::Added(_) | Self::Edited(_) | Self::Deleted(_))
    }

    pub(crate) fn touches_budgets(&self) -> bool {
        matches!(self, Self::BudgetSet { .. })
    }
}

/// Filter + search over the expense list.
#[derive(Debug, Clone, Default)]
pub(crate) struct ExpenseQuery {
    pub(crate) category: CategoryFilter,
    pub(crate) search: String,
}

impl ExpenseQuery {
    pub(crate) fn matches(&self, expense: &Expense) -> bool {
        if !self.category.matches(expense) {
            return false;
        }
        let needle = self.search.trim();
        needle.is_empty() || expense.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// The whole in-memory dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Ledger {
    pub(crate) expenses: Vec<Expense>,
    pub(crate) budgets: Budgets,
}

impl Ledger {
    pub(crate) fn apply(&mut self, action: Action) -> Outcome {
        match action {
            Action::Add(draft) => {
                let expense = Expense::from_draft(draft);
                let id = expense.id;
                self.expenses.push(expense);
                Outcome::Added(id)
            }
            Action::Edit { id, draft } => match self.expenses.iter_mut().find(|e| e.id == id) {
                Some(slot) => {
                    *slot = Expense::with_id(id, draft);
                    Outcome::Edited(id)
                }
                None => Outcome::NotFound(id),
            },
            Action::Delete(id) => match self.expenses.iter().position(|e| e.id == id) {
                Some(idx) => Outcome::Deleted(self.expenses.remove(idx)),
                None => Outcome::NotFound(id),
            },
            Action::SetBudget { category, limit } => {
                self.budgets.set(category.clone(), limit);
                Outcome::BudgetSet { category, limit }
            }
        }
    }

    pub(crate) fn get(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Matching records, newest date first. Ties keep collection order.
    pub(crate) fn query(&self, query: &ExpenseQuery) -> Vec<&Expense> {
        let mut result: Vec<&Expense> =
            self.expenses.iter().filter(|e| query.matches(e)).collect();
        result.sort_by(|a, b| b.date.cmp(&a.date));
        result
    }

    /// Resolve a short id typed on the command line. Must match exactly one record.
    pub(crate) fn find_by_prefix(&self, prefix: &str) -> Option<&Expense> {
        let prefix = prefix.trim().to_lowercase().replace('-', "");
        if prefix.is_empty() {
            return None;
        }
        let mut matches = self
            .expenses
            .iter()
            .filter(|e| e.id.simple().to_string().starts_with(&prefix));
        match (matches.next(), matches.next()) {
            (Some(e), None) => Some(e),
            _ => None,
        }
    }
}
