mod budget;
mod category;
mod expense;
mod month;

pub(crate) use budget::Budgets;
pub(crate) use category::{Category, CategoryFilter};
pub(crate) use expense::{parse_amount, Expense, ExpenseDraft, ValidationError, DATE_FORMAT};
pub(crate) use month::YearMonth;

#[cfg(test)]
mod tests;
