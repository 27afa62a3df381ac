use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, Screen};
use crate::config::shellexpand;
use crate::models::{parse_amount, Category, CategoryFilter, ExpenseDraft, YearMonth};
use crate::report;
use crate::store::{Action, Outcome, Store};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Store) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit SpendTUI", cmd_quit, r);
    register_command!("quit", "Quit SpendTUI", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("ls", "Go to Expenses", cmd_expenses, r);
    register_command!("expenses", "Go to Expenses", cmd_expenses, r);
    register_command!("b", "Go to Budgets", cmd_budgets, r);
    register_command!("budgets", "Go to Budgets", cmd_budgets, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add expense (form, or :add 2024-05-01 Lunch 12.50 Food)",
        cmd_add,
        r
    );
    register_command!("a", "Add expense", cmd_add, r);
    register_command!("edit", "Edit selected expense", cmd_edit, r);
    register_command!("delete", "Delete selected expense", cmd_delete, r);
    register_command!("del", "Delete selected expense", cmd_delete, r);
    register_command!(
        "filter",
        "Filter by category (e.g. :filter Food, :filter All)",
        cmd_filter,
        r
    );
    register_command!("f", "Filter by category", cmd_filter, r);
    register_command!(
        "search",
        "Search expense names (e.g. :search coffee)",
        cmd_search,
        r
    );
    register_command!("s", "Search expense names", cmd_search, r);
    register_command!(
        "budget",
        "Set monthly budget (e.g. :budget Food 400)",
        cmd_budget,
        r
    );
    register_command!(
        "export",
        "Export all expenses to CSV (e.g. :export ~/spend.csv)",
        cmd_export,
        r
    );
    register_command!("x", "Export all expenses to CSV", cmd_export, r);
    register_command!("month", "Set month (e.g. :month 2024-01)", cmd_month, r);
    register_command!("m", "Set month (e.g. :m 2024-01)", cmd_month, r);
    register_command!("next-month", "Go to next month", cmd_next_month, r);
    register_command!("prev-month", "Go to previous month", cmd_prev_month, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, store)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 2) // aliases make poor suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    app.refresh(store);
    Ok(())
}

fn cmd_expenses(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Expenses;
    app.refresh(store);
    Ok(())
}

fn cmd_budgets(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Budgets;
    app.refresh(store);
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if args.is_empty() {
        app.open_add_form();
        return Ok(());
    }

    let draft = match ExpenseDraft::parse_inline(args, app.today) {
        Ok(draft) => draft,
        Err(e) => {
            app.set_status(format!(
                "{e}. Usage: :add <date|today> <name> <amount> <category>"
            ));
            return Ok(());
        }
    };
    let (name, amount) = (draft.name.clone(), draft.amount);
    if let Outcome::Added(_) = app.dispatch(store, Action::Add(draft)) {
        app.set_status(format!("Added: {name} ${amount:.2}"));
    }
    Ok(())
}

fn cmd_edit(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    if app.screen != Screen::Expenses {
        app.set_status("Navigate to Expenses and select one first");
        return Ok(());
    }
    app.open_edit_form();
    Ok(())
}

fn cmd_delete(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    if app.screen != Screen::Expenses {
        app.set_status("Navigate to Expenses and select one first");
        return Ok(());
    }
    app.confirm_delete();
    Ok(())
}

fn cmd_filter(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let filter = if args.is_empty() {
        app.filter.next()
    } else {
        match CategoryFilter::parse(args) {
            Some(filter) => filter,
            None => {
                let names: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
                app.set_status(format!(
                    "Unknown category '{args}'. Available: All, {}",
                    names.join(", ")
                ));
                return Ok(());
            }
        }
    };

    app.filter = filter;
    app.screen = Screen::Expenses;
    app.expense_cursor.top();
    app.refresh(store);
    app.set_status(format!("Filter: {filter}"));
    Ok(())
}

fn cmd_search(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    app.search_input = args.to_string();
    app.screen = Screen::Expenses;
    app.expense_cursor.top();
    app.refresh(store);
    if args.is_empty() {
        app.set_status("Search cleared");
    } else {
        app.set_status(format!("{} matches for '{args}'", app.expenses.len()));
    }
    Ok(())
}

fn cmd_budget(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let Some((category_name, amount_str)) = args.rsplit_once(' ') else {
        app.set_status("Usage: :budget <category> <amount>");
        return Ok(());
    };

    let Some(category) = Category::find(category_name.trim()) else {
        let names: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
        app.set_status(format!(
            "Unknown category '{}'. Available: {}",
            category_name.trim(),
            names.join(", ")
        ));
        return Ok(());
    };

    let limit = match parse_amount(amount_str) {
        Ok(limit) => limit,
        Err(e) => {
            app.set_status(e.to_string());
            return Ok(());
        }
    };

    app.dispatch(
        store,
        Action::SetBudget {
            category: category.as_str().to_string(),
            limit,
        },
    );
    app.screen = Screen::Budgets;
    app.set_status(format!("Budget set: {category} = ${limit:.2}/month"));
    Ok(())
}

fn cmd_export(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let path = match shellexpand(args) {
        _ if args.is_empty() => report::default_export_path(&app.export_dir, app.today),
        dir if dir.is_dir() => report::default_export_path(&dir, app.today),
        file => file,
    };

    match report::export_to_file(&path, &store.ledger().expenses) {
        Ok(0) => app.set_status(format!(
            "No expenses to export (header written to {})",
            path.display()
        )),
        Ok(count) => app.set_status(format!("Exported {count} expenses to {}", path.display())),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "export failed");
            app.set_status(format!("Export failed: {e}"));
        }
    }
    Ok(())
}

fn cmd_month(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if args.is_empty() {
        let current = YearMonth::of(app.today);
        app.set_view_month(store, current);
        return Ok(());
    }
    match YearMonth::parse(args) {
        Some(month) => app.set_view_month(store, month),
        None => app.set_status(format!("Invalid month: {args} (use YYYY-MM)")),
    }
    Ok(())
}

fn cmd_next_month(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let next = app.view_month.succ();
    app.set_view_month(store, next);
    Ok(())
}

fn cmd_prev_month(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let prev = app.view_month.pred();
    app.set_view_month(store, prev);
    Ok(())
}
