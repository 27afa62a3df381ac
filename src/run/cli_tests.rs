#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::db::Database;
use crate::notify::Alert;

#[derive(Default)]
struct Recorder(Vec<Alert>);

impl Notifier for Recorder {
    fn request_permission(&mut self) -> bool {
        true
    }

    fn deliver(&mut self, alert: &Alert) {
        self.0.push(alert.clone());
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
}

fn args(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

fn setup() -> (Store, Recorder) {
    let store = Store::load(Database::open_in_memory().unwrap()).unwrap();
    (store, Recorder::default())
}

#[test]
fn test_add_takes_multi_word_names() {
    let (mut store, mut notifier) = setup();
    cli_add(&args("2024-05-02 Corner shop milk 3.50 food"), &mut store, &mut notifier, today())
        .unwrap();

    let ledger = store.ledger();
    assert_eq!(ledger.expenses.len(), 1);
    assert_eq!(ledger.expenses[0].name, "Corner shop milk");
    assert_eq!(ledger.expenses[0].amount, dec!(3.50));
    assert_eq!(ledger.expenses[0].category, Category::Food);
}

#[test]
fn test_edit_by_id_prefix() {
    let (mut store, mut notifier) = setup();
    cli_add(&args("2024-05-02 Taxi 18 Transport"), &mut store, &mut notifier, today()).unwrap();
    let original = store.ledger().expenses[0].clone();

    let line = format!("{} 2024-05-03 Airport taxi 42 Transport", original.short_id());
    cli_edit(&args(&line), &mut store, &mut notifier, today()).unwrap();

    let edited = &store.ledger().expenses[0];
    assert_eq!(edited.id, original.id);
    assert_eq!(edited.name, "Airport taxi");
    assert_eq!(edited.amount, dec!(42));
    assert_eq!(edited.date, NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
}

#[test]
fn test_edit_unknown_prefix_fails() {
    let (mut store, mut notifier) = setup();
    cli_add(&args("2024-05-02 Taxi 18 Transport"), &mut store, &mut notifier, today()).unwrap();

    let err = cli_edit(&args("zzzz 2024-05-03 Bus 2 Transport"), &mut store, &mut notifier, today())
        .unwrap_err();
    assert!(err.to_string().contains("No single expense matches id 'zzzz'"));
    assert!(cli_edit(&[], &mut store, &mut notifier, today()).is_err());
    assert_eq!(store.ledger().expenses[0].name, "Taxi");
}

#[test]
fn test_delete_by_id_prefix() {
    let (mut store, mut notifier) = setup();
    cli_add(&args("2024-05-02 Keep 1 Other"), &mut store, &mut notifier, today()).unwrap();
    cli_add(&args("2024-05-02 Drop 2 Other"), &mut store, &mut notifier, today()).unwrap();
    let gone = store.ledger().expenses[1].clone();

    cli_delete(&args(&gone.short_id()), &mut store, today()).unwrap();
    assert_eq!(store.ledger().expenses.len(), 1);
    assert_eq!(store.ledger().expenses[0].name, "Keep");
}

#[test]
fn test_budget_sets_limit_and_alerts() {
    let (mut store, mut notifier) = setup();
    cli_add(&args("2024-05-02 Stereo 250 Shopping"), &mut store, &mut notifier, today()).unwrap();

    cli_budget(&args("shopping $200"), &mut store, &mut notifier, today()).unwrap();
    assert_eq!(store.ledger().budgets.limit_for("Shopping"), Some(dec!(200)));
    assert_eq!(notifier.0.len(), 1);
    assert_eq!(notifier.0[0].spent, dec!(250));
}

#[test]
fn test_budget_rejects_unknown_or_multi_word_category() {
    let (mut store, mut notifier) = setup();
    let err = cli_budget(&args("Eating out 50"), &mut store, &mut notifier, today()).unwrap_err();
    assert_eq!(err.to_string(), "Unknown category: Eating out");
    assert!(cli_budget(&args("Food lots"), &mut store, &mut notifier, today()).is_err());
    assert!(cli_budget(&[], &mut store, &mut notifier, today()).is_err());
    assert!(store.ledger().budgets.is_empty());
}

#[test]
fn test_list_flags() {
    let (store, _) = setup();
    assert!(cli_list(&args("--category Food --search milk"), &store).is_ok());
    assert!(cli_list(&args("--category Snacks"), &store).is_err());

    let list = args("--search corner --category all");
    assert_eq!(flag_value(&list, "--search"), Some("corner"));
    assert_eq!(flag_value(&list, "--category"), Some("all"));
    assert_eq!(flag_value(&args("--search"), "--search"), None);
}

#[test]
fn test_month_arg() {
    assert_eq!(month_arg(&[], today()).unwrap(), YearMonth::of(today()));
    assert_eq!(
        month_arg(&args("2023-11"), today()).unwrap().to_string(),
        "2023-11"
    );
    assert_eq!(month_arg(&args("--x"), today()).unwrap(), YearMonth::of(today()));
    assert!(month_arg(&args("Nov"), today()).is_err());
}

#[test]
fn test_export_into_directory() {
    let (mut store, mut notifier) = setup();
    cli_add(&args("2024-05-02 Taxi 18 Transport"), &mut store, &mut notifier, today()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default();

    cli_export(&[dir.path().display().to_string()], &store, &config, today()).unwrap();
    let written = dir.path().join("spendtui-export-2024-05-15.csv");
    assert_eq!(std::fs::read_to_string(written).unwrap().lines().count(), 2);
}

#[test]
fn test_unknown_subcommand() {
    let (mut store, mut notifier) = setup();
    let err = as_cli(&args("spendtui frobnicate"), &mut store, &Config::default(), &mut notifier)
        .unwrap_err();
    assert_eq!(err.to_string(), "Unknown command: frobnicate");
}
