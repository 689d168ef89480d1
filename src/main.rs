use anyhow::anyhow;
use chrono::Utc;
use clap::Parser;
use diary::application::{init::init, ConfigService, DiaryService, ListOptions};
use diary::cli::{format_entry, format_entry_list, Cli, Commands};
use diary::domain::parse_entry_date;
use diary::error::DiaryError;
use diary::infrastructure::{FileSystemRepository, JsonFileStore};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing() {
        eprintln!("Warning: failed to initialise logging: {}", e);
    }

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn open_diary() -> Result<DiaryService<JsonFileStore>, DiaryError> {
    let repo = FileSystemRepository::discover()?;
    DiaryService::open(&repo)
}

fn run(cli: Cli) -> Result<(), DiaryError> {
    match cli.command {
        Some(Commands::Init { path }) => init(&path),
        Some(Commands::New { title, body, date }) => {
            // Parse entry date, defaulting to now
            let now = Utc::now();
            let created_at = match date {
                Some(input) => parse_entry_date(&input, now)?,
                None => now,
            };

            let mut service = open_diary()?;
            let entry = service.create(&title, &body, created_at)?;
            println!("{}", entry.id);
            Ok(())
        }
        Some(Commands::List { starred, limit }) => {
            let service = open_diary()?;
            let date_format = service.config().get_date_format()?;
            // Newest first, after filters
            let entries = service.list(&ListOptions {
                starred_only: starred,
                limit,
            });
            print!("{}", format_entry_list(&entries, &date_format));
            if entries.is_empty() {
                println!();
            }
            Ok(())
        }
        Some(Commands::Show { id }) => {
            let service = open_diary()?;
            let date_format = service.config().get_date_format()?;
            print!("{}", format_entry(service.show(&id)?, &date_format));
            Ok(())
        }
        Some(Commands::Edit { id, title, body }) => {
            let mut service = open_diary()?;
            let entry = service.edit(&id, title, body)?;
            println!("Updated {}", entry.short_id());
            Ok(())
        }
        Some(Commands::Star { id }) => {
            let mut service = open_diary()?;
            let entry = service.set_starred(&id, true)?;
            println!("Starred {}", entry.short_id());
            Ok(())
        }
        Some(Commands::Unstar { id }) => {
            let mut service = open_diary()?;
            let entry = service.set_starred(&id, false)?;
            println!("Unstarred {}", entry.short_id());
            Ok(())
        }
        Some(Commands::Delete { id }) => {
            let mut service = open_diary()?;
            // Report the title, the entry is gone afterwards
            let entry = service.delete(&id)?;
            println!("Deleted {}  {}", entry.short_id(), entry.title);
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            // Discover repository
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                // List all config
                let config = service.list()?;
                println!("store_key = {}", config.store_key);
                println!("date_format = {}", config.date_format);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    // Set config value
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    // Get config value
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                // No key provided, show usage
                println!("Usage: diary config [--list | <key> [<value>]]");
                println!("Valid keys: store_key, date_format");
                Ok(())
            }
        }
        None => {
            // No command, show help
            println!("diary - Terminal diary application");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
