//! Command-line driver for the word list.
//!
//! Each invocation opens the shared database, runs one screen action through
//! the same controller/presenter path a UI host uses, waits for the writer,
//! then prints the resulting list.

use clap::{Parser, Subcommand};
use log::info;
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use wordlist_core::{
    init_logging, CoreConfig, SwipeDirection, WordDatabase, WordId, WordListPresenter,
    WordListScreen,
};

#[derive(Debug, Parser)]
#[command(name = "wordlist", version)]
#[command(about = "Word list backed by a local SQLite database", long_about = None)]
struct Cli {
    /// Database file (defaults to WORDLIST_DB_PATH or <temp>/word_database)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Absolute directory for rolling log files
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print every word in id order
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Add a new word
    Add { text: String },
    /// Replace the text of the word with this id
    Edit { id: WordId, text: String },
    /// Delete the word shown at this zero-based row
    Delete { position: usize },
    /// Delete every word
    Clear,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = CoreConfig::from_env();
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(dir) = cli.log_dir {
        config.log_dir = Some(dir);
    }
    if let Some(dir) = config.log_dir.as_ref() {
        init_logging(&config.log_level, dir)?;
    }

    let database = WordDatabase::shared(&config.db_path)?;
    let screen = WordListScreen::new(Arc::clone(&database));
    let mut presenter = screen.attach_view();
    presenter.poll();
    let faults = database.faults();

    let (notice, json) = match cli.command {
        Commands::List { json } => (None, json),
        Commands::Add { text } => {
            let (request, mut entry) = screen.launch_create();
            entry.set_input(text);
            (screen.on_entry_result(request.code(), entry.submit()), false)
        }
        Commands::Edit { id, text } => {
            let word = (0..presenter.row_count())
                .filter_map(|position| presenter.word_at(position))
                .find(|word| word.id == Some(id))
                .cloned()
                .ok_or_else(|| format!("no word with id {id}"))?;
            let (request, mut entry) = screen.launch_edit(&word);
            entry.set_input(text);
            (screen.on_entry_result(request.code(), entry.submit()), false)
        }
        Commands::Delete { position } => {
            let notice = screen
                .on_swipe(&mut presenter, position, SwipeDirection::Left)
                .ok_or_else(|| format!("no word at row {position}"))?;
            (Some(notice), false)
        }
        Commands::Clear => (Some(screen.clear_all()), false),
    };

    database.flush()?;
    if let Some(fault) = faults.try_next() {
        let stage = if fault.committed { "refresh after" } else { "failed:" };
        return Err(format!("{} {} {}", fault.operation.as_str(), stage, fault.message).into());
    }
    if let Some(notice) = notice {
        println!("{notice}");
    }
    presenter.poll();
    info!(
        "event=cli_done module=cli status=ok rows={}",
        presenter.row_count()
    );

    if json {
        print_json(&presenter)?;
    } else {
        print_rows(&presenter);
    }
    Ok(())
}

fn print_rows(presenter: &WordListPresenter) {
    if presenter.row_count() == 0 {
        println!("(empty)");
    }
    for position in 0..presenter.row_count() {
        let id = presenter
            .word_at(position)
            .and_then(|word| word.id)
            .unwrap_or_default();
        println!("{position:>3}  #{id:<4} {}", presenter.row_label(position));
    }
}

fn print_json(presenter: &WordListPresenter) -> Result<(), Box<dyn Error>> {
    let words: Vec<_> = (0..presenter.row_count())
        .filter_map(|position| presenter.word_at(position))
        .collect();
    println!("{}", serde_json::to_string_pretty(&words)?);
    Ok(())
}
