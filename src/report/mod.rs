mod export;

pub(crate) use export::{default_export_path, export_to_file};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::{Budgets, Category, Expense, YearMonth};

/// Per-category totals for one month, in `Category::all()` order.
/// Categories without spending are left out.
pub(crate) fn monthly_summary(expenses: &[Expense], month: YearMonth) -> Vec<(Category, Decimal)> {
    let mut totals: HashMap<Category, Decimal> = HashMap::new();
    for e in expenses.iter().filter(|e| month.contains(e.date)) {
        let sum = totals.entry(e.category).or_default();
        *sum = sum.saturating_add(e.amount);
    }
    Category::all()
        .iter()
        .filter_map(|c| totals.get(c).map(|t| (*c, *t)))
        .collect()
}

pub(crate) fn category_total(expenses: &[Expense], category: &str, month: YearMonth) -> Decimal {
    total(
        expenses
            .iter()
            .filter(|e| e.category.as_str() == category && month.contains(e.date))
            .map(|e| e.amount),
    )
}

pub(crate) fn month_total(expenses: &[Expense], month: YearMonth) -> Decimal {
    total(
        expenses
            .iter()
            .filter(|e| month.contains(e.date))
            .map(|e| e.amount),
    )
}

/// Sum of `amounts`, pinned at `Decimal::MAX` instead of overflowing.
pub(crate) fn total(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Totals for the `months` months ending with `end`, oldest first.
pub(crate) fn monthly_trend(
    expenses: &[Expense],
    end: YearMonth,
    months: usize,
) -> Vec<(YearMonth, Decimal)> {
    let mut trend = Vec::with_capacity(months);
    let mut month = end;
    for _ in 0..months {
        trend.push((month, month_total(expenses, month)));
        month = month.pred();
    }
    trend.reverse();
    trend
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BudgetLine {
    pub(crate) category: String,
    pub(crate) limit: Decimal,
    pub(crate) spent: Decimal,
}

impl BudgetLine {
    /// Spent / limit, unclamped. Zero when the limit is zero.
    /// Quotients too large for `Decimal` are computed in `f64`.
    pub(crate) fn ratio(&self) -> f64 {
        if self.limit <= Decimal::ZERO {
            return 0.0;
        }
        match self.spent.checked_div(self.limit) {
            Some(ratio) => ratio.to_f64().unwrap_or(0.0),
            None => {
                let spent = self.spent.to_f64().unwrap_or(0.0);
                let limit = self.limit.to_f64().unwrap_or(f64::MIN_POSITIVE);
                spent / limit
            }
        }
    }

    pub(crate) fn is_over(&self) -> bool {
        self.spent > self.limit
    }

    pub(crate) fn remaining(&self) -> Decimal {
        self.limit - self.spent
    }
}

/// One line per configured budget with what was spent in `month`.
pub(crate) fn budget_status(
    expenses: &[Expense],
    budgets: &Budgets,
    month: YearMonth,
) -> Vec<BudgetLine> {
    budgets
        .iter()
        .map(|(category, limit)| BudgetLine {
            category: category.to_string(),
            limit,
            spent: category_total(expenses, category, month),
        })
        .collect()
}
