use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::path::PathBuf;
use uuid::Uuid;

use super::form::ExpenseForm;
use super::util::ListCursor;
use crate::models::{Category, CategoryFilter, Expense, YearMonth};
use crate::notify::{check_overspend, Alert, Notifier};
use crate::report::{self, BudgetLine};
use crate::store::{Action, ExpenseQuery, Outcome, Store};

/// Months shown in the dashboard trend.
const TREND_MONTHS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Expenses,
    Budgets,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Expenses, Self::Budgets]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Expenses => write!(f, "Expenses"),
            Self::Budgets => write!(f, "Budgets"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Search,
    Form,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
            Self::Form => write!(f, "FORM"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeleteExpense { id: Uuid, name: String },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) search_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    /// Month shown on the dashboard and budgets screens.
    pub(crate) view_month: YearMonth,
    /// Overspend checks always run against this date's month. The TUI loop
    /// keeps it current through `set_today`.
    pub(crate) today: NaiveDate,

    // Dashboard
    pub(crate) summary: Vec<(Category, Decimal)>,
    pub(crate) month_total: Decimal,
    pub(crate) month_count: usize,
    pub(crate) trend: Vec<(YearMonth, Decimal)>,
    pub(crate) alerts: Vec<Alert>,
    /// Alert raised by the last change, shown until the next one.
    pub(crate) alert_banner: Option<Alert>,

    // Expenses
    pub(crate) expenses: Vec<Expense>,
    pub(crate) expense_cursor: ListCursor,
    pub(crate) filter: CategoryFilter,
    pub(crate) total_count: usize,

    // Budgets
    pub(crate) budget_lines: Vec<BudgetLine>,
    pub(crate) budget_cursor: ListCursor,

    // Form and confirmation
    pub(crate) form: Option<ExpenseForm>,
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    pub(crate) export_dir: PathBuf,
    notifier: Box<dyn Notifier>,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(today: NaiveDate, export_dir: PathBuf, notifier: Box<dyn Notifier>) -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            search_input: String::new(),
            status_message: String::new(),
            show_help: false,
            view_month: YearMonth::of(today),
            today,

            summary: Vec::new(),
            month_total: Decimal::ZERO,
            month_count: 0,
            trend: Vec::new(),
            alerts: Vec::new(),
            alert_banner: None,

            expenses: Vec::new(),
            expense_cursor: ListCursor::default(),
            filter: CategoryFilter::All,
            total_count: 0,

            budget_lines: Vec::new(),
            budget_cursor: ListCursor::default(),

            form: None,
            pending_action: None,
            confirm_message: String::new(),

            export_dir,
            notifier,

            visible_rows: 20,
        }
    }

    pub(crate) fn query(&self) -> ExpenseQuery {
        ExpenseQuery {
            category: self.filter,
            search: self.search_input.clone(),
        }
    }

    /// Rebuild every view from the ledger.
    pub(crate) fn refresh(&mut self, store: &Store) {
        let ledger = store.ledger();
        let month = self.view_month;

        self.summary = report::monthly_summary(&ledger.expenses, month);
        self.month_total = report::month_total(&ledger.expenses, month);
        self.month_count = ledger
            .expenses
            .iter()
            .filter(|e| month.contains(e.date))
            .count();
        self.trend = report::monthly_trend(&ledger.expenses, month, TREND_MONTHS);
        self.alerts = ledger
            .budgets
            .iter()
            .filter_map(|(category, _)| check_overspend(ledger, category, self.today))
            .collect();

        self.expenses = ledger.query(&self.query()).into_iter().cloned().collect();
        self.total_count = ledger.expenses.len();
        self.expense_cursor.clamp(self.expenses.len(), self.visible_rows);

        self.budget_lines = report::budget_status(&ledger.expenses, &ledger.budgets, month);
        self.budget_cursor.clamp(self.budget_lines.len(), self.visible_rows);
    }

    /// Send `action` through the store, refresh, and deliver any overspend alert.
    pub(crate) fn dispatch(&mut self, store: &mut Store, action: Action) -> Outcome {
        let dispatched = store.dispatch(action, self.today);
        self.refresh(store);
        if let Some(alert) = &dispatched.alert {
            self.notifier.deliver(alert);
        }
        self.alert_banner = dispatched.alert;
        dispatched.outcome
    }

    /// Move the clock forward. A view parked on the current month follows
    /// it into the new one.
    pub(crate) fn set_today(&mut self, store: &Store, today: NaiveDate) {
        if today == self.today {
            return;
        }
        if self.view_month == YearMonth::of(self.today) {
            self.view_month = YearMonth::of(today);
        }
        self.today = today;
        self.refresh(store);
    }

    pub(crate) fn selected_expense(&self) -> Option<&Expense> {
        self.expenses.get(self.expense_cursor.index)
    }

    pub(crate) fn set_view_month(&mut self, store: &Store, month: YearMonth) {
        self.view_month = month;
        self.refresh(store);
        self.set_status(format!("Month: {month}"));
    }

    pub(crate) fn open_add_form(&mut self) {
        self.form = Some(ExpenseForm::new_add(self.today));
        self.input_mode = InputMode::Form;
    }

    pub(crate) fn open_edit_form(&mut self) {
        let Some(form) = self.selected_expense().map(ExpenseForm::new_edit) else {
            self.set_status("Select an expense on the Expenses screen first");
            return;
        };
        self.form = Some(form);
        self.input_mode = InputMode::Form;
    }

    /// Validate the open form and apply it. Invalid input leaves the form open.
    pub(crate) fn submit_form(&mut self, store: &mut Store) {
        let Some(form) = &self.form else {
            return;
        };
        let action = match form.to_action(self.today) {
            Ok(action) => action,
            Err(e) => {
                self.set_status(e.to_string());
                return;
            }
        };

        self.form = None;
        self.input_mode = InputMode::Normal;
        match self.dispatch(store, action) {
            Outcome::Added(id) => {
                self.select(id);
                let name = self.name_of(store, id);
                self.set_status(format!("Added: {name}"));
            }
            Outcome::Edited(id) => {
                self.select(id);
                let name = self.name_of(store, id);
                self.set_status(format!("Updated: {name}"));
            }
            Outcome::NotFound(_) => self.set_status("That expense no longer exists"),
            Outcome::Deleted(_) | Outcome::BudgetSet { .. } => {}
        }
    }

    pub(crate) fn cancel_form(&mut self) {
        self.form = None;
        self.input_mode = InputMode::Normal;
        self.set_status("Cancelled");
    }

    /// Ask before deleting the expense under the cursor.
    pub(crate) fn confirm_delete(&mut self) {
        let Some(expense) = self.selected_expense() else {
            self.set_status("Select an expense on the Expenses screen first");
            return;
        };
        let (id, name) = (expense.id, expense.name.clone());
        self.confirm_message = format!("Delete '{name}'?");
        self.pending_action = Some(PendingAction::DeleteExpense { id, name });
        self.input_mode = InputMode::Confirm;
    }

    pub(crate) fn resolve_pending(&mut self, store: &mut Store, confirmed: bool) {
        let pending = self.pending_action.take();
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();

        if !confirmed {
            self.set_status("Cancelled");
            return;
        }
        if let Some(PendingAction::DeleteExpense { id, name }) = pending {
            match self.dispatch(store, Action::Delete(id)) {
                Outcome::Deleted(_) => self.set_status(format!("Deleted: {name}")),
                _ => self.set_status(format!("'{name}' was already gone")),
            }
        }
    }

    fn select(&mut self, id: Uuid) {
        if let Some(idx) = self.expenses.iter().position(|e| e.id == id) {
            self.expense_cursor.index = idx;
            self.expense_cursor.clamp(self.expenses.len(), self.visible_rows);
        }
    }

    fn name_of(&self, store: &Store, id: Uuid) -> String {
        store
            .ledger()
            .get(id)
            .map(|e| e.name.clone())
            .unwrap_or_default()
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
