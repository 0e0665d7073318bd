mod input;
mod logging;
mod render;
mod runtime;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use turf_core::{Catalog, DisplayMode};

use crate::runtime::run_app;
use crate::ui::App;

#[derive(Debug, Parser)]
#[command(name = "turf", about = "Turf community shell for the terminal")]
struct Args {
    /// Start in night mode.
    #[arg(long)]
    night: bool,

    /// Append logs to this file. Filtering follows the TURF_LOG env var
    /// (tracing env-filter syntax, defaults to "info").
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref())?;

    // Restore the terminal before the panic message hits a raw-mode screen.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        eprintln!("\n{panic_info}");
        original_hook(panic_info);
    }));

    let catalog = Catalog::bundled().context("loading bundled catalog")?;
    tracing::info!(
        events = catalog.events().len(),
        posts = catalog.posts().len(),
        dms = catalog.dms().len(),
        "catalog loaded"
    );
    let mode = if args.night {
        DisplayMode::Night
    } else {
        DisplayMode::Day
    };
    let mut app = App::new(catalog, mode);

    let mut terminal = ui::init_terminal()?;
    let result = run_app(&mut terminal, &mut app).await;
    ui::restore_terminal()?;
    result
}
