use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io::Write;

use crate::models::YearMonth;
use crate::report::category_total;
use crate::store::Ledger;

/// A category went over its budget in the current month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Alert {
    pub(crate) category: String,
    pub(crate) spent: Decimal,
    pub(crate) limit: Decimal,
    pub(crate) month: YearMonth,
}

impl Alert {
    pub(crate) fn message(&self) -> String {
        format!(
            "Budget exceeded: {} spent ${:.2} of ${:.2} in {}",
            self.category, self.spent, self.limit, self.month
        )
    }
}

/// Checks `category` against its budget for the month containing `today`.
/// Fires only when spending is strictly greater than the ceiling.
pub(crate) fn check_overspend(ledger: &Ledger, category: &str, today: NaiveDate) -> Option<Alert> {
    let limit = ledger.budgets.limit_for(category)?;
    let month = YearMonth::of(today);
    let spent = category_total(&ledger.expenses, category, month);
    (spent > limit).then(|| Alert {
        category: category.to_string(),
        spent,
        limit,
        month,
    })
}

pub(crate) trait Notifier {
    /// Asked once at startup. Returns whether alerts will be shown.
    fn request_permission(&mut self) -> bool;
    fn deliver(&mut self, alert: &Alert);
}

/// Alerts on the controlling terminal: a bell, plus the message on stderr
/// unless the TUI owns the screen.
pub(crate) struct TerminalNotifier {
    enabled: bool,
    granted: Option<bool>,
    print_message: bool,
}

impl TerminalNotifier {
    pub(crate) fn new(enabled: bool, print_message: bool) -> Self {
        Self {
            enabled,
            granted: None,
            print_message,
        }
    }
}

impl Notifier for TerminalNotifier {
    fn request_permission(&mut self) -> bool {
        if let Some(granted) = self.granted {
            return granted;
        }
        let granted = self.enabled;
        tracing::info!(granted, "notification permission");
        self.granted = Some(granted);
        granted
    }

    fn deliver(&mut self, alert: &Alert) {
        tracing::warn!(
            category = %alert.category,
            spent = %alert.spent,
            limit = %alert.limit,
            "budget exceeded"
        );
        if self.granted != Some(true) {
            return;
        }
        if self.print_message {
            eprintln!("\x07{}", alert.message());
        } else {
            let mut stdout = std::io::stdout();
            let _ = stdout.write_all(b"\x07");
            let _ = stdout.flush();
        }
    }
}

#[cfg(test)]
mod tests;
