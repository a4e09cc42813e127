//! CLI Module for snix-launcher
//! Non-interactive access to the same core the overlay uses: list, search, validate and
//! combine snippets straight from the terminal.

pub mod commands;

use crate::config::Settings;
use crate::models::{LoadedCollection, SnippetStore};
use crate::selection::SelectionValidator;
use anyhow::{Context, Result, bail};
use colored::Colorize;
use std::path::PathBuf;

pub(crate) const GUTTER: &str = "┃";

/// Command line after global flags have been taken out
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliArgs {
    pub snippets: Option<PathBuf>,
    pub command: Vec<String>,
}

impl CliArgs {
    /// Extracts `--snippets <PATH>` / `--snippets=<PATH>` from anywhere in `args`
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut parsed = CliArgs::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            if arg == "--snippets" {
                let path = iter.next().context("--snippets requires a path")?;
                parsed.snippets = Some(PathBuf::from(path));
            } else if let Some(path) = arg.strip_prefix("--snippets=") {
                if path.is_empty() {
                    bail!("--snippets requires a path");
                }
                parsed.snippets = Some(PathBuf::from(path));
            } else {
                parsed.command.push(arg.clone());
            }
        }

        Ok(parsed)
    }
}

/// Settings, store and loaded collection shared by the CLI and the overlay
pub struct Session {
    pub settings: Settings,
    pub store: SnippetStore,
    pub loaded: LoadedCollection,
}

impl Session {
    pub fn open(args: &CliArgs) -> Result<Self> {
        let settings = Settings::load()?;
        let path = settings
            .snippets_path(args.snippets.as_deref())
            .context("Failed to determine the snippet file location; pass --snippets <PATH>")?;

        let store = SnippetStore::new(path);
        let validator = SelectionValidator::new(&settings.launcher);
        let loaded = store.load(&validator)?;

        Ok(Self {
            settings,
            store,
            loaded,
        })
    }
}

/// Executes CLI commands based on the provided arguments
pub fn execute_cli(args: &CliArgs) -> Result<()> {
    let Some(command) = args.command.first() else {
        print_help();
        return Ok(());
    };
    let rest = &args.command[1..];

    match command.as_str() {
        "list" | "ls" => {
            let session = Session::open(args)?;
            commands::list_snippets(&session);
        }
        "search" | "find" => {
            if rest.is_empty() {
                println!("{}  Error: Missing search query", GUTTER.bright_magenta());
                println!("{}  Usage: snix-launcher search <QUERY>", GUTTER.bright_magenta());
                return Ok(());
            }
            let session = Session::open(args)?;
            commands::search_snippets(&session, &rest.join(" "));
        }
        "validate" | "check" => {
            let session = Session::open(args)?;
            commands::validate_snippets(&session);
        }
        "combine" => {
            if rest.is_empty() {
                println!("{}  Error: Missing snippet titles", GUTTER.bright_magenta());
                println!(
                    "{}  Usage: snix-launcher combine <TITLE> [TITLE...]",
                    GUTTER.bright_magenta()
                );
                return Ok(());
            }
            let session = Session::open(args)?;
            commands::combine_snippets(&session, rest)?;
        }
        "help" | "--help" | "-h" => print_help(),
        _ => {
            println!("{}  Unknown command: {}", GUTTER.bright_magenta(), command);
            print_help();
        }
    }

    Ok(())
}

/// Prints the help message with available commands
fn print_help() {
    println!(
        "{}  {}",
        GUTTER.bright_magenta(),
        "SNIX LAUNCHER - SNIPPET OVERLAY".bold()
    );
    println!("{}  {}", GUTTER.bright_magenta(), "USAGE:".bright_yellow());
    println!(
        "{}  snix-launcher [--snippets PATH] [COMMAND] [ARGS]",
        GUTTER.bright_magenta()
    );
    println!("{}  {}", GUTTER.bright_magenta(), "COMMANDS:".bright_yellow());

    for (usage, description) in [
        ("list, ls", "List every usable snippet"),
        ("search, find <QUERY>", "Show snippets matching the query"),
        ("validate, check", "Report entries dropped while loading"),
        ("combine <TITLE>...", "Print the combined content of snippets"),
        ("help", "Display this help message"),
    ] {
        println!(
            "{}  {:<27} {}",
            GUTTER.bright_magenta(),
            usage.bright_white(),
            description
        );
    }

    println!("{}  {}", GUTTER.bright_magenta(), "TIP:".bright_green());
    println!(
        "{}  Run without a command to open the overlay; the chosen text is printed to stdout",
        GUTTER.bright_magenta()
    );
}
