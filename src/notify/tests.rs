#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{Category, ExpenseDraft};
use crate::store::{Action, Ledger};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn ledger_with(entries: &[(Decimal, Category, &str)]) -> Ledger {
    let mut ledger = Ledger::default();
    for (amount, category, date) in entries {
        ledger.apply(Action::Add(ExpenseDraft {
            name: "x".into(),
            amount: *amount,
            category: *category,
            date: day(date),
        }));
    }
    ledger
}

#[test]
fn test_no_budget_no_alert() {
    let ledger = ledger_with(&[(dec!(1000), Category::Food, "2024-03-01")]);
    assert!(check_overspend(&ledger, "Food", day("2024-03-15")).is_none());
}

#[test]
fn test_at_limit_is_not_over() {
    let mut ledger = ledger_with(&[(dec!(100), Category::Food, "2024-03-01")]);
    ledger.budgets.set("Food", dec!(100));
    assert!(check_overspend(&ledger, "Food", day("2024-03-15")).is_none());
}

#[test]
fn test_over_limit_alerts() {
    let mut ledger = ledger_with(&[
        (dec!(60), Category::Food, "2024-03-01"),
        (dec!(45), Category::Food, "2024-03-09"),
    ]);
    ledger.budgets.set("Food", dec!(100));
    let alert = check_overspend(&ledger, "Food", day("2024-03-15")).unwrap();
    assert_eq!(alert.spent, dec!(105));
    assert_eq!(alert.limit, dec!(100));
    assert_eq!(alert.month.to_string(), "2024-03");
    assert_eq!(
        alert.message(),
        "Budget exceeded: Food spent $105.00 of $100.00 in 2024-03"
    );
}

#[test]
fn test_prior_month_spending_ignored() {
    let mut ledger = ledger_with(&[
        (dec!(500), Category::Bills, "2024-02-28"),
        (dec!(10), Category::Bills, "2024-03-01"),
    ]);
    ledger.budgets.set("Bills", dec!(100));
    assert!(check_overspend(&ledger, "Bills", day("2024-03-15")).is_none());
    assert!(check_overspend(&ledger, "Bills", day("2024-02-15")).is_some());
}

#[test]
fn test_other_categories_ignored() {
    let mut ledger = ledger_with(&[(dec!(500), Category::Shopping, "2024-03-02")]);
    ledger.budgets.set("Food", dec!(10));
    assert!(check_overspend(&ledger, "Food", day("2024-03-15")).is_none());
}

#[test]
fn test_permission_requested_once() {
    let mut notifier = TerminalNotifier::new(true, false);
    assert!(notifier.request_permission());
    notifier.enabled = false;
    assert!(notifier.request_permission());
}

#[test]
fn test_permission_denied_when_disabled() {
    let mut notifier = TerminalNotifier::new(false, true);
    assert!(!notifier.request_permission());
    // Delivery without permission is a no-op apart from logging.
    notifier.deliver(&Alert {
        category: "Food".into(),
        spent: dec!(2),
        limit: dec!(1),
        month: YearMonth::parse("2024-03").unwrap(),
    });
}
