use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{Category, Expense, ExpenseDraft, ValidationError, DATE_FORMAT};
use crate::store::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Name,
    Amount,
    Category,
    Date,
}

impl FormField {
    pub(crate) fn all() -> &'static [FormField] {
        &[Self::Name, Self::Amount, Self::Category, Self::Date]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Amount => "Amount",
            Self::Category => "Category",
            Self::Date => "Date",
        }
    }
}

/// The add/edit overlay. Text stays raw until submit.
#[derive(Debug, Clone)]
pub(crate) struct ExpenseForm {
    /// `Some` when editing an existing record.
    pub(crate) editing: Option<Uuid>,
    pub(crate) name: String,
    pub(crate) amount: String,
    pub(crate) category: Category,
    pub(crate) date: String,
    pub(crate) focus: FormField,
}

impl ExpenseForm {
    pub(crate) fn new_add(today: NaiveDate) -> Self {
        Self {
            editing: None,
            name: String::new(),
            amount: String::new(),
            category: Category::Food,
            date: today.format(DATE_FORMAT).to_string(),
            focus: FormField::Name,
        }
    }

    pub(crate) fn new_edit(expense: &Expense) -> Self {
        Self {
            editing: Some(expense.id),
            name: expense.name.clone(),
            amount: expense.amount.to_string(),
            category: expense.category,
            date: expense.date.format(DATE_FORMAT).to_string(),
            focus: FormField::Name,
        }
    }

    pub(crate) fn title(&self) -> &'static str {
        if self.editing.is_some() {
            " Edit Expense "
        } else {
            " New Expense "
        }
    }

    pub(crate) fn value_of(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Amount => &self.amount,
            FormField::Category => self.category.as_str(),
            FormField::Date => &self.date,
        }
    }

    /// The text buffer under focus; the category field is a picker, not text.
    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Name => Some(&mut self.name),
            FormField::Amount => Some(&mut self.amount),
            FormField::Date => Some(&mut self.date),
            FormField::Category => None,
        }
    }

    pub(crate) fn push_char(&mut self, c: char) {
        if let Some(text) = self.focused_text() {
            text.push(c);
        }
    }

    pub(crate) fn pop_char(&mut self) {
        if let Some(text) = self.focused_text() {
            text.pop();
        }
    }

    pub(crate) fn next_field(&mut self) {
        self.shift_focus(1);
    }

    pub(crate) fn prev_field(&mut self) {
        self.shift_focus(FormField::all().len() - 1);
    }

    fn shift_focus(&mut self, by: usize) {
        let fields = FormField::all();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + by) % fields.len()];
    }

    /// Step through categories when the picker has focus.
    pub(crate) fn cycle_category(&mut self, forward: bool) {
        if self.focus != FormField::Category {
            return;
        }
        let all = Category::all();
        let idx = all.iter().position(|c| *c == self.category).unwrap_or(0);
        let next = if forward {
            (idx + 1) % all.len()
        } else {
            (idx + all.len() - 1) % all.len()
        };
        self.category = all[next];
    }

    pub(crate) fn to_draft(&self, today: NaiveDate) -> Result<ExpenseDraft, ValidationError> {
        ExpenseDraft::parse(
            &self.name,
            &self.amount,
            self.category.as_str(),
            &self.date,
            today,
        )
    }

    pub(crate) fn to_action(&self, today: NaiveDate) -> Result<Action, ValidationError> {
        let draft = self.to_draft(today)?;
        Ok(match self.editing {
            Some(id) => Action::Edit { id, draft },
            None => Action::Add(draft),
        })
    }
}
