#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn make_expense(name: &str, category: Category) -> Expense {
    Expense::from_draft(ExpenseDraft {
        name: name.into(),
        amount: dec!(10),
        category,
        date: day(2024, 1, 15),
    })
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_parse() {
    assert_eq!(Category::parse("food"), Category::Food);
    assert_eq!(Category::parse("FOOD"), Category::Food);
    assert_eq!(Category::parse(" Transport "), Category::Transport);
    assert_eq!(Category::parse("bills"), Category::Bills);
    assert_eq!(Category::parse("unknown"), Category::Other);
}

#[test]
fn test_category_find_is_strict() {
    assert_eq!(Category::find("health"), Some(Category::Health));
    assert_eq!(Category::find("groceries"), None);
    assert_eq!(Category::find(""), None);
}

#[test]
fn test_category_all() {
    let all = Category::all();
    assert_eq!(all.len(), 7);
    assert_eq!(all[0], Category::Food);
    assert_eq!(*all.last().unwrap(), Category::Other);
}

#[test]
fn test_category_roundtrip() {
    for c in Category::all() {
        assert_eq!(Category::parse(c.as_str()), *c, "Roundtrip failed for {c}");
    }
}

#[test]
fn test_category_serde_lenient() {
    let json = serde_json::to_string(&Category::Entertainment).unwrap();
    assert_eq!(json, "\"Entertainment\"");
    let back: Category = serde_json::from_str("\"Gardening\"").unwrap();
    assert_eq!(back, Category::Other);
}

// ── CategoryFilter ────────────────────────────────────────────

#[test]
fn test_filter_all_matches_everything() {
    for c in Category::all() {
        assert!(CategoryFilter::All.matches(&make_expense("x", *c)));
    }
}

#[test]
fn test_filter_only_matches_category() {
    let filter = CategoryFilter::Only(Category::Food);
    assert!(filter.matches(&make_expense("Lunch", Category::Food)));
    assert!(!filter.matches(&make_expense("Bus", Category::Transport)));
}

#[test]
fn test_filter_parse() {
    assert_eq!(CategoryFilter::parse("All"), Some(CategoryFilter::All));
    assert_eq!(CategoryFilter::parse(""), Some(CategoryFilter::All));
    assert_eq!(
        CategoryFilter::parse("shopping"),
        Some(CategoryFilter::Only(Category::Shopping))
    );
    assert_eq!(CategoryFilter::parse("nope"), None);
}

#[test]
fn test_filter_cycle_returns_to_all() {
    let mut filter = CategoryFilter::All;
    let mut seen = Vec::new();
    for _ in 0..Category::all().len() {
        filter = filter.next();
        seen.push(filter);
    }
    assert_eq!(seen[0], CategoryFilter::Only(Category::Food));
    assert_eq!(*seen.last().unwrap(), CategoryFilter::Only(Category::Other));
    assert_eq!(filter.next(), CategoryFilter::All);
}

// ── ExpenseDraft ──────────────────────────────────────────────

#[test]
fn test_draft_parse_valid() {
    let draft =
        ExpenseDraft::parse("  Coffee ", "4.50", "food", "2024-03-02", day(2024, 3, 10)).unwrap();
    assert_eq!(draft.name, "Coffee");
    assert_eq!(draft.amount, dec!(4.50));
    assert_eq!(draft.category, Category::Food);
    assert_eq!(draft.date, day(2024, 3, 2));
}

#[test]
fn test_draft_parse_empty_date_is_today() {
    let today = day(2024, 5, 20);
    let draft = ExpenseDraft::parse("Taxi", "12", "Transport", "", today).unwrap();
    assert_eq!(draft.date, today);
}

#[test]
fn test_draft_parse_errors() {
    let today = day(2024, 1, 1);
    assert_eq!(
        ExpenseDraft::parse("   ", "1", "Food", "", today),
        Err(ValidationError::EmptyName)
    );
    assert_eq!(
        ExpenseDraft::parse("x", "abc", "Food", "", today),
        Err(ValidationError::InvalidAmount("abc".into()))
    );
    assert_eq!(
        ExpenseDraft::parse("x", "-3", "Food", "", today),
        Err(ValidationError::NegativeAmount(dec!(-3)))
    );
    assert_eq!(
        ExpenseDraft::parse("x", "3", "Rocketry", "", today),
        Err(ValidationError::UnknownCategory("Rocketry".into()))
    );
    assert_eq!(
        ExpenseDraft::parse("x", "3", "Food", "01/02/2024", today),
        Err(ValidationError::InvalidDate("01/02/2024".into()))
    );
}

#[test]
fn test_draft_parse_inline() {
    let today = day(2024, 6, 1);
    let draft = ExpenseDraft::parse_inline("2024-05-30 Dinner at Luigi's 48.10 food", today).unwrap();
    assert_eq!(draft.name, "Dinner at Luigi's");
    assert_eq!(draft.amount, dec!(48.10));
    assert_eq!(draft.category, Category::Food);
    assert_eq!(draft.date, day(2024, 5, 30));

    let draft = ExpenseDraft::parse_inline("today Bus 2.75 Transport", today).unwrap();
    assert_eq!(draft.date, today);
}

#[test]
fn test_draft_parse_inline_too_short() {
    assert_eq!(
        ExpenseDraft::parse_inline("today 3 Food", day(2024, 1, 1)),
        Err(ValidationError::MissingFields)
    );
}

#[test]
fn test_parse_amount_formats() {
    assert_eq!(parse_amount("$1,200.50").unwrap(), dec!(1200.50));
    assert_eq!(parse_amount(" 0 ").unwrap(), Decimal::ZERO);
    assert!(parse_amount("").is_err());
}

#[test]
fn test_validation_error_messages() {
    assert_eq!(ValidationError::EmptyName.to_string(), "Name cannot be empty");
    assert_eq!(
        ValidationError::InvalidAmount("x".into()).to_string(),
        "Invalid amount: x"
    );
}

// ── Expense ───────────────────────────────────────────────────

#[test]
fn test_expense_ids_are_unique() {
    let a = make_expense("a", Category::Food);
    let b = make_expense("a", Category::Food);
    assert_ne!(a.id, b.id);
    assert_eq!(a.short_id().len(), 8);
}

#[test]
fn test_expense_json_roundtrip() {
    let e = make_expense("Dinner, with friends", Category::Food);
    let json = serde_json::to_string(&e).unwrap();
    assert!(json.contains("\"date\":\"2024-01-15\""));
    let back: Expense = serde_json::from_str(&json).unwrap();
    assert_eq!(back, e);
}

// ── Budgets ───────────────────────────────────────────────────

#[test]
fn test_budgets_set_overwrites() {
    let mut budgets = Budgets::default();
    assert!(budgets.is_empty());
    budgets.set("Food", dec!(200));
    budgets.set("Food", dec!(350));
    budgets.set("Travel", dec!(50));
    assert_eq!(budgets.len(), 2);
    assert_eq!(budgets.limit_for("Food"), Some(dec!(350)));
    assert_eq!(budgets.limit_for("Travel"), Some(dec!(50)));
    assert_eq!(budgets.limit_for("Bills"), None);
}

#[test]
fn test_budgets_json_is_a_plain_map() {
    let mut budgets = Budgets::default();
    budgets.set("Food", dec!(200.00));
    let json = serde_json::to_string(&budgets).unwrap();
    assert_eq!(json, r#"{"Food":"200.00"}"#);
}

// ── YearMonth ─────────────────────────────────────────────────

#[test]
fn test_year_month_parse_and_display() {
    let m = YearMonth::parse("2024-1").unwrap();
    assert_eq!(m.to_string(), "2024-01");
    assert_eq!(m, YearMonth::parse(" 2024-01 ").unwrap());
    assert!(YearMonth::parse("2024-13").is_none());
    assert!(YearMonth::parse("garbage").is_none());
}

#[test]
fn test_year_month_contains() {
    let m = YearMonth::of(day(2024, 2, 10));
    assert!(m.contains(day(2024, 2, 1)));
    assert!(m.contains(day(2024, 2, 29)));
    assert!(!m.contains(day(2024, 3, 1)));
    assert!(!m.contains(day(2023, 2, 10)));
}

#[test]
fn test_year_month_succ_pred_wrap_years() {
    let dec_2023 = YearMonth::parse("2023-12").unwrap();
    assert_eq!(dec_2023.succ().to_string(), "2024-01");
    assert_eq!(dec_2023.succ().pred(), dec_2023);
    assert_eq!(YearMonth::parse("2024-01").unwrap().pred(), dec_2023);
}
