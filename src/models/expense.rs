use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use super::Category;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Expense {
    pub(crate) id: Uuid,
    pub(crate) name: String,
    pub(crate) amount: Decimal,
    pub(crate) category: Category,
    pub(crate) date: NaiveDate,
}

impl Expense {
    pub(crate) fn from_draft(draft: ExpenseDraft) -> Self {
        Self::with_id(Uuid::new_v4(), draft)
    }

    pub(crate) fn with_id(id: Uuid, draft: ExpenseDraft) -> Self {
        Self {
            id,
            name: draft.name,
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
        }
    }

    /// First eight hex digits of the id, enough to address a record from the CLI.
    pub(crate) fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

/// Validated form input: everything an expense has except its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExpenseDraft {
    pub(crate) name: String,
    pub(crate) amount: Decimal,
    pub(crate) category: Category,
    pub(crate) date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Decimal),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Invalid date (use YYYY-MM-DD): {0}")]
    InvalidDate(String),
    #[error("Expected: <date> <name> <amount> <category>")]
    MissingFields,
}

impl ExpenseDraft {
    /// Validate raw form fields. An empty date means `today`.
    pub(crate) fn parse(
        name: &str,
        amount: &str,
        category: &str,
        date: &str,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let amount = parse_amount(amount)?;

        let category = Category::find(category)
            .ok_or_else(|| ValidationError::UnknownCategory(category.trim().to_string()))?;

        let date = match date.trim() {
            "" => today,
            d => NaiveDate::parse_from_str(d, DATE_FORMAT)
                .map_err(|_| ValidationError::InvalidDate(d.to_string()))?,
        };

        Ok(Self {
            name: name.to_string(),
            amount,
            category,
            date,
        })
    }

    /// One-line form: `<date|today> <name...> <amount> <category>`.
    /// The name may contain spaces; amount and category are the last two words.
    pub(crate) fn parse_inline(args: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        let words: Vec<&str> = args.split_whitespace().collect();
        if words.len() < 4 {
            return Err(ValidationError::MissingFields);
        }
        let date = match words[0] {
            d if d.eq_ignore_ascii_case("today") => "",
            d => d,
        };
        let category = words[words.len() - 1];
        let amount = words[words.len() - 2];
        let name = words[1..words.len() - 2].join(" ");
        Self::parse(&name, amount, category, date, today)
    }
}

impl From<&Expense> for ExpenseDraft {
    fn from(e: &Expense) -> Self {
        Self {
            name: e.name.clone(),
            amount: e.amount,
            category: e.category,
            date: e.date,
        }
    }
}

/// Parse a user-typed amount such as `12.50`, `$1,200` or ` 3 `.
pub(crate) fn parse_amount(s: &str) -> Result<Decimal, ValidationError> {
    let cleaned = s.trim().replace(['$', ','], "");
    let amount = Decimal::from_str(cleaned.trim())
        .map_err(|_| ValidationError::InvalidAmount(s.trim().to_string()))?;
    if amount < Decimal::ZERO {
        return Err(ValidationError::NegativeAmount(amount));
    }
    Ok(amount)
}
