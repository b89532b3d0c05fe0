//! Hilite GUI Entry Point
//!
//! Opens the desktop search window.

use clap::Parser;
use console::style;
use hilite::cli::{init_logging, GlobalArgs};
use hilite::{load_catalog, logging};

/// Hilite desktop window
#[derive(Parser)]
#[command(name = "hilite-gui")]
#[command(version)]
#[command(about = "Debounced search-as-you-type window", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
}

fn main() {
    let cli = Cli::parse();

    let result = cli.global.resolve_config().and_then(|config| {
        init_logging(&config, cli.global.log_level());
        let catalog = load_catalog(&config)?;
        hilite::gui::run(catalog, &config)
    });
    logging::flush();

    if let Err(e) = result {
        logging::error("MAIN", &e.to_string());
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(e.exit_code());
    }
}
