//! Hilite CLI
//!
//! Interactive terminal search by default, plus one-shot commands for
//! scripting.

use clap::{Parser, Subcommand};
use console::style;
use hilite::cli::{init_logging, GlobalArgs};
use hilite::{load_catalog, logging, AppConfig, ResultRow, SearchSession, Span, EMPTY_MESSAGE};
use serde::Serialize;
use std::time::Instant;

/// Hilite - search as you type, with highlighted matches
///
/// Keystrokes are debounced before the catalog is filtered, so the list
/// only updates once typing pauses.
#[derive(Parser)]
#[command(name = "hilite")]
#[command(author = "Hilite Contributors")]
#[command(version)]
#[command(about = "Debounced search-as-you-type with match highlighting", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive terminal UI (default)
    Tui,

    /// Filter the catalog once and print highlighted matches
    Search {
        /// Query (use -- before it if it starts with -)
        #[arg(allow_hyphen_values = true)]
        query: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the active catalog
    Catalog {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    logging::flush();

    if let Err(e) = result {
        logging::error("MAIN", &e.to_string());
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> hilite::Result<()> {
    let config = cli.global.resolve_config()?;
    init_logging(&config, cli.global.log_level());

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            let catalog = load_catalog(&config)?;
            hilite::tui::run(catalog, &config)
        }
        Commands::Search { query, json } => cmd_search(&config, &query, json),
        Commands::Catalog { json } => cmd_catalog(&config, json),
    }
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    query: &'a str,
    count: usize,
    results: Vec<ResultRow<'a>>,
}

/// Search command implementation
fn cmd_search(config: &AppConfig, query: &str, json: bool) -> hilite::Result<()> {
    let catalog = load_catalog(config)?;
    let mut session = SearchSession::new(catalog, config);

    // One-shot: no keystrokes to debounce
    session.set_query(query, Instant::now());
    session.flush();

    if json {
        let output = SearchOutput {
            query,
            count: session.result_count(),
            results: session.rows(),
        };
        let text = serde_json::to_string_pretty(&output)
            .map_err(|e| hilite::HiliteError::Io(e.into()))?;
        println!("{}", text);
        return Ok(());
    }

    println!(
        "{} Searching for '{}'",
        style("\u{2192}").cyan().bold(),
        style(query).yellow()
    );
    println!();
    println!(
        "{} were found.",
        style(format!("{} post", session.result_count())).bold()
    );
    println!();

    let rows = session.rows();
    if rows.is_empty() {
        println!("  {}", style(EMPTY_MESSAGE).dim());
        return Ok(());
    }

    for (i, row) in rows.iter().enumerate() {
        println!(
            "  {} {}",
            style(format!("{:3}.", i + 1)).dim(),
            paint(&row.title_spans, true)
        );
        println!("       {}", paint(&row.description_spans, false));
    }

    Ok(())
}

/// Catalog command implementation
fn cmd_catalog(config: &AppConfig, json: bool) -> hilite::Result<()> {
    let catalog = load_catalog(config)?;

    if json {
        let text = serde_json::to_string_pretty(catalog.records())
            .map_err(|e| hilite::HiliteError::Io(e.into()))?;
        println!("{}", text);
        return Ok(());
    }

    let source = config
        .catalog
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in sample".to_string());
    println!(
        "{} {} records ({})",
        style("\u{2192}").cyan().bold(),
        catalog.len(),
        style(source).dim()
    );
    println!();

    for (i, record) in catalog.records().iter().enumerate() {
        println!(
            "  {} {}",
            style(format!("{:3}.", i + 1)).dim(),
            style(&record.title).bold()
        );
        println!("       {}", record.description);
    }

    for title in catalog.duplicate_titles() {
        println!(
            "  {} duplicate title '{}'",
            style("!").yellow().bold(),
            title
        );
    }

    Ok(())
}

/// Render spans for the terminal, marking matches black on yellow
fn paint(spans: &[Span<'_>], strong: bool) -> String {
    spans
        .iter()
        .map(|span| {
            let styled = match span {
                Span::Match(text) => style(*text).black().on_yellow(),
                Span::Plain(text) => style(*text),
            };
            if strong {
                styled.bold().to_string()
            } else {
                styled.to_string()
            }
        })
        .collect()
}
