//! Console shim and entry point.
//!
//! This binary is the thin driver around the wantshelf library: it builds
//! the coordinator against the live OpenLibrary client, forwards line
//! commands from stdin as intents, and prints every state snapshot the
//! coordinator publishes. It holds no logic of its own; the screen's
//! behavior is entirely the library's.
//!
//! # Commands
//!
//! - `more`: load the next page
//! - `open <n>`: open detail for the n-th listed book (1-based)
//! - `close`: dismiss the detail overlay
//! - `retry`: retry a failed initial load
//! - `retry-more`: retry a failed pagination attempt
//! - `quit`: exit
//!
//! # Configuration
//!
//! Set `WANTSHELF_CONFIG` to the path of a TOML config file; otherwise
//! defaults are used. Tracing output goes to stderr, controlled by the
//! `trace_level` config field.

use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use wantshelf::app::{Intent, ShelfCoordinator};
use wantshelf::catalog::HttpCatalog;
use wantshelf::domain::{GetBookDetailUseCase, ListBooksUseCase};
use wantshelf::{Config, ShelfError, ShelfState};

#[tokio::main]
async fn main() {
    let config = match load_config() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    };

    wantshelf::observability::init_tracing(&config);

    let catalog = match HttpCatalog::new(&config) {
        Ok(catalog) => Arc::new(catalog),
        Err(error) => {
            eprintln!("failed to build catalog client: {error}");
            std::process::exit(1);
        }
    };

    let coordinator = ShelfCoordinator::new(
        ListBooksUseCase::new(catalog.clone()),
        GetBookDetailUseCase::new(catalog),
    );

    let mut snapshots = coordinator.subscribe();
    let printer = tokio::spawn(async move {
        while snapshots.changed().await.is_ok() {
            let snapshot = snapshots.borrow().clone();
            print_state(&snapshot);
        }
    });

    let lookup = coordinator.subscribe();
    coordinator.dispatch(Intent::Initialise);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let command = line.trim();
        match command {
            "" => {}
            "quit" | "q" => break,
            "more" => coordinator.dispatch(Intent::LoadMore),
            "retry" => coordinator.dispatch(Intent::TryAgain),
            "retry-more" => coordinator.dispatch(Intent::RetryPagination),
            "close" => coordinator.dispatch(Intent::DismissDetail),
            _ => {
                let key = parse_open(command, &lookup.borrow());
                match key {
                    Some(key) => coordinator.dispatch(Intent::BookClicked { key }),
                    None => {
                        println!("commands: more, open <n>, close, retry, retry-more, quit");
                    }
                }
            }
        }
    }

    printer.abort();
}

fn load_config() -> Result<Config, String> {
    match std::env::var("WANTSHELF_CONFIG") {
        Ok(path) => {
            Config::from_file(&path).map_err(|e| format!("failed to load {path}: {e}"))
        }
        Err(_) => Ok(Config::default()),
    }
}

/// Parses `open <n>` and resolves the 1-based index against the current
/// list.
fn parse_open(command: &str, state: &ShelfState) -> Option<String> {
    let index: usize = command.strip_prefix("open ")?.trim().parse().ok()?;
    let book = state.books.get(index.checked_sub(1)?)?;
    Some(book.key.clone())
}

fn print_state(state: &ShelfState) {
    if state.is_loading {
        println!("loading shelf...");
        return;
    }

    if let Some(ShelfError::Books(error)) = &state.error {
        println!("could not load shelf: {error} (type 'retry')");
        return;
    }

    println!("-- want to read ({} books, page {}) --", state.books.len(), state.current_page);
    for (index, book) in state.books.iter().enumerate() {
        println!("{:>3}. {} by {}", index + 1, book.title, book.author_names);
    }

    if state.is_loading_more {
        println!("    loading more...");
    } else if let Some(message) = &state.pagination_error {
        println!("    could not load more: {message} (type 'retry-more')");
    } else if !state.can_load_more {
        println!("    end of list");
    }

    if state.sheet_visible {
        if state.is_loading_detail {
            println!("[detail] loading...");
        } else if let Some(ShelfError::Detail(error)) = &state.error {
            println!("[detail] failed: {error}");
        } else if let Some(detail) = &state.detail {
            println!("[detail] {}", detail.title);
            if !detail.first_publish_date.is_empty() {
                println!("[detail] first published {}", detail.first_publish_date);
            }
            if !detail.description.is_empty() {
                println!("[detail] {}", detail.description);
            }
            if !detail.subject_places.is_empty() {
                println!("[detail] places: {}", detail.subject_places.join(", "));
            }
            if !detail.latest_revision.is_empty() {
                println!("[detail] revision {}", detail.latest_revision);
            }
        }
    }
}
