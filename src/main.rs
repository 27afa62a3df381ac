mod config;
mod db;
mod logging;
mod models;
mod notify;
mod report;
mod run;
mod store;
mod ui;

use anyhow::Result;

use crate::notify::{Notifier, TerminalNotifier};

const DB_FILENAME: &str = "spendtui.db";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::load()?;
    let data_dir = config.data_dir()?;
    logging::init(&data_dir, &config.log_filter)?;

    let db = db::Database::open(&data_dir.join(DB_FILENAME))?;
    let mut store = store::Store::load(db)?;

    let interactive = args.len() == 1;
    let mut notifier = TerminalNotifier::new(config.notifications, !interactive);
    notifier.request_permission();

    if interactive {
        run::as_tui(&mut store, &config, Box::new(notifier))
    } else {
        run::as_cli(&args, &mut store, &config, &mut notifier)
    }
}
