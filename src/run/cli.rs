use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::config::{shellexpand, Config};
use crate::models::{parse_amount, Category, CategoryFilter, ExpenseDraft, YearMonth};
use crate::notify::Notifier;
use crate::report;
use crate::store::{Action, Dispatched, ExpenseQuery, Outcome, Store};
use crate::ui::util::{format_amount, truncate};

pub(crate) fn as_cli(
    args: &[String],
    store: &mut Store,
    config: &Config,
    notifier: &mut dyn Notifier,
) -> Result<()> {
    let today = Local::now().date_naive();
    let rest = &args[2..];
    match args[1].as_str() {
        "add" => cli_add(rest, store, notifier, today),
        "edit" => cli_edit(rest, store, notifier, today),
        "delete" | "rm" => cli_delete(rest, store, today),
        "list" | "ls" => cli_list(rest, store),
        "summary" | "s" => cli_summary(rest, store, today),
        "budget" => cli_budget(rest, store, notifier, today),
        "budgets" => cli_budgets(rest, store, today),
        "export" => cli_export(rest, store, config, today),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("spendtui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("SpendTUI — local-only expense tracker");
    println!();
    println!("Usage: spendtui [command]");
    println!();
    println!("Commands:");
    println!("  (none)                                  Launch interactive TUI");
    println!("  add <date|today> <name> <amount> <cat>  Add an expense");
    println!("  edit <id> <date|today> <name> <amount> <cat>");
    println!("                                          Replace an expense's fields");
    println!("  delete <id>                             Delete an expense");
    println!("  list                                    List expenses, newest first");
    println!("    --category <cat|All>                  Only this category");
    println!("    --search <text>                       Name contains text");
    println!("  summary [YYYY-MM]                       Category totals (default: this month)");
    println!("  budget <cat> <amount>                   Set a monthly budget");
    println!("  budgets [YYYY-MM]                       Budget usage (default: this month)");
    println!("  export [path]                           Export all expenses to CSV");
    println!("  --help, -h                              Show this help");
    println!("  --version, -V                           Show version");
    println!();
    println!(
        "Categories: {}",
        Category::all()
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
}

fn report_alert(dispatched: &Dispatched, notifier: &mut dyn Notifier) {
    if let Some(alert) = &dispatched.alert {
        notifier.deliver(alert);
    }
}

fn cli_add(
    args: &[String],
    store: &mut Store,
    notifier: &mut dyn Notifier,
    today: NaiveDate,
) -> Result<()> {
    let draft = ExpenseDraft::parse_inline(&args.join(" "), today)?;
    let dispatched = store.dispatch(Action::Add(draft), today);
    if let Outcome::Added(id) = dispatched.outcome {
        if let Some(e) = store.ledger().get(id) {
            println!(
                "Added {} {} ${:.2} ({}) on {}",
                e.short_id(),
                e.name,
                e.amount,
                e.category,
                e.date
            );
        }
    }
    report_alert(&dispatched, notifier);
    Ok(())
}

fn cli_edit(
    args: &[String],
    store: &mut Store,
    notifier: &mut dyn Notifier,
    today: NaiveDate,
) -> Result<()> {
    let Some((prefix, fields)) = args.split_first() else {
        anyhow::bail!("Usage: spendtui edit <id> <date|today> <name> <amount> <category>");
    };
    let id = store
        .ledger()
        .find_by_prefix(prefix)
        .map(|e| e.id)
        .ok_or_else(|| anyhow::anyhow!("No single expense matches id '{prefix}'"))?;
    let draft = ExpenseDraft::parse_inline(&fields.join(" "), today)?;
    let dispatched = store.dispatch(Action::Edit { id, draft }, today);
    if let Outcome::Edited(id) = dispatched.outcome {
        if let Some(e) = store.ledger().get(id) {
            println!(
                "Updated {}: {} ${:.2} ({}) on {}",
                e.short_id(),
                e.name,
                e.amount,
                e.category,
                e.date
            );
        }
    }
    report_alert(&dispatched, notifier);
    Ok(())
}

fn cli_delete(args: &[String], store: &mut Store, today: NaiveDate) -> Result<()> {
    let Some(prefix) = args.first() else {
        anyhow::bail!("Usage: spendtui delete <id>");
    };
    let id = store
        .ledger()
        .find_by_prefix(prefix)
        .map(|e| e.id)
        .ok_or_else(|| anyhow::anyhow!("No single expense matches id '{prefix}'"))?;
    if let Outcome::Deleted(e) = store.dispatch(Action::Delete(id), today).outcome {
        println!("Deleted {} {}", e.short_id(), e.name);
    }
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn cli_list(args: &[String], store: &Store) -> Result<()> {
    let category = match flag_value(args, "--category") {
        Some(c) => CategoryFilter::parse(c)
            .ok_or_else(|| anyhow::anyhow!("Unknown category: {c}"))?,
        None => CategoryFilter::All,
    };
    let query = ExpenseQuery {
        category,
        search: flag_value(args, "--search").unwrap_or_default().to_string(),
    };

    let expenses = store.ledger().query(&query);
    if expenses.is_empty() {
        println!("No expenses");
        return Ok(());
    }

    println!(
        "{:<9} {:<11} {:<28} {:<14} {:>10}",
        "ID", "Date", "Name", "Category", "Amount"
    );
    println!("{}", "─".repeat(76));
    for e in &expenses {
        println!(
            "{:<9} {:<11} {:<28} {:<14} {:>10}",
            e.short_id(),
            e.date.to_string(),
            truncate(&e.name, 28),
            e.category.as_str(),
            format_amount(e.amount),
        );
    }
    let total = report::total(expenses.iter().map(|e| e.amount));
    println!("{}", "─".repeat(76));
    println!(
        "{} expenses, {} total",
        expenses.len(),
        format_amount(total)
    );
    Ok(())
}

fn month_arg(args: &[String], today: NaiveDate) -> Result<YearMonth> {
    match args.first().filter(|a| !a.starts_with('-')) {
        Some(m) => YearMonth::parse(m)
            .ok_or_else(|| anyhow::anyhow!("Invalid month: {m} (use YYYY-MM)")),
        None => Ok(YearMonth::of(today)),
    }
}

fn cli_summary(args: &[String], store: &Store, today: NaiveDate) -> Result<()> {
    let month = month_arg(args, today)?;
    let expenses = &store.ledger().expenses;
    let summary = report::monthly_summary(expenses, month);

    println!("SpendTUI — {month}");
    println!("{}", "─".repeat(40));
    let count = expenses.iter().filter(|e| month.contains(e.date)).count();
    println!("  Total spent: {}", format_amount(report::month_total(expenses, month)));
    println!("  Expenses:    {count}");

    if !summary.is_empty() {
        println!();
        println!("By Category:");
        for (category, amount) in &summary {
            println!("  {:<16} {}", category.as_str(), format_amount(*amount));
        }
    }
    Ok(())
}

fn cli_budget(
    args: &[String],
    store: &mut Store,
    notifier: &mut dyn Notifier,
    today: NaiveDate,
) -> Result<()> {
    let Some((amount_str, category_words)) = args.split_last() else {
        anyhow::bail!("Usage: spendtui budget <category> <amount>");
    };
    let category_name = category_words.join(" ");
    let category = Category::find(&category_name)
        .ok_or_else(|| anyhow::anyhow!("Unknown category: {category_name}"))?;
    let limit = parse_amount(amount_str)?;

    let dispatched = store.dispatch(
        Action::SetBudget {
            category: category.as_str().to_string(),
            limit,
        },
        today,
    );
    println!("Budget set: {category} = ${limit:.2} per month");
    report_alert(&dispatched, notifier);
    Ok(())
}

fn cli_budgets(args: &[String], store: &Store, today: NaiveDate) -> Result<()> {
    let month = month_arg(args, today)?;
    let ledger = store.ledger();
    if ledger.budgets.is_empty() {
        println!("No budgets. Set one with: spendtui budget <category> <amount>");
        return Ok(());
    }

    println!("Budgets for {month}");
    println!("{}", "─".repeat(56));
    for line in report::budget_status(&ledger.expenses, &ledger.budgets, month) {
        println!(
            "  {:<16} {:>12} / {:<12} {:>4.0}%{}",
            line.category,
            format_amount(line.spent),
            format_amount(line.limit),
            line.ratio() * 100.0,
            if line.is_over() { "  OVER" } else { "" }
        );
    }
    Ok(())
}

fn cli_export(args: &[String], store: &Store, config: &Config, today: NaiveDate) -> Result<()> {
    let path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| shellexpand(a))
        .map(|p| {
            if p.is_dir() {
                report::default_export_path(&p, today)
            } else {
                p
            }
        })
        .unwrap_or_else(|| report::default_export_path(&config.export_dir(), today));

    let count = report::export_to_file(&path, &store.ledger().expenses)?;
    if count == 0 {
        println!("No expenses to export (wrote header only to {})", path.display());
    } else {
        println!("Exported {count} expenses to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
