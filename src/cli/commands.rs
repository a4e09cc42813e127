use crate::cli::{GUTTER, Session};
use crate::config::LauncherConfig;
use crate::models::{Snippet, SnippetCollection};
use crate::selection::{CombinationController, CombinedPayload, search};
use anyhow::{Result, anyhow};
use colored::Colorize;

/// Lists every usable snippet with its content size
pub fn list_snippets(session: &Session) {
    let snippets = &session.loaded.snippets;
    println!(
        "{}  {} {}",
        GUTTER.bright_magenta(),
        "SNIPPETS".bright_green().bold(),
        session.store.path().display().to_string().dimmed()
    );
    println!("{}", "─".repeat(60).bright_magenta());

    if snippets.is_empty() {
        println!("{}  No snippets found", GUTTER.bright_magenta());
        return;
    }

    for (idx, snippet) in snippets.iter().enumerate() {
        print_snippet_row(idx, snippet);
    }

    if !session.loaded.rejected.is_empty() {
        println!(
            "{}  {} entries were dropped, run `snix-launcher validate` for details",
            GUTTER.bright_magenta(),
            session.loaded.rejected.len().to_string().yellow()
        );
    }
}

/// Shows the filtered view for `query`, in collection order
pub fn search_snippets(session: &Session, query: &str) {
    let view = search::filter(&session.loaded.snippets, query);

    println!(
        "{}  {} \"{}\" ({} results)",
        GUTTER.bright_magenta(),
        "SEARCH".bright_green().bold(),
        query.bright_white(),
        view.len()
    );
    println!("{}", "─".repeat(60).bright_magenta());

    if view.is_empty() {
        println!("{}  No matches", GUTTER.bright_magenta());
        return;
    }

    for (idx, snippet) in view.iter().enumerate() {
        print_snippet_row(idx, snippet);
        let first_line = snippet.first_line().trim();
        if !first_line.is_empty() {
            println!("{}       {}", GUTTER.bright_magenta(), first_line.dimmed());
        }
    }
}

/// Reports every entry that was dropped while loading, with the rule it broke
pub fn validate_snippets(session: &Session) {
    let loaded = &session.loaded;
    println!(
        "{}  {} {}",
        GUTTER.bright_magenta(),
        "VALIDATE".bright_green().bold(),
        session.store.path().display()
    );
    println!("{}", "─".repeat(60).bright_magenta());

    for err in &loaded.rejected {
        println!(
            "{}  {} {:<14} {}",
            GUTTER.bright_magenta(),
            format!("#{:<4}", err.index()).yellow(),
            err.rule().bright_red(),
            err
        );
    }

    println!(
        "{}  {} usable, {} dropped",
        GUTTER.bright_magenta(),
        loaded.snippets.len().to_string().bright_green(),
        loaded.rejected.len().to_string().bright_red()
    );
}

/// Builds a combination from titles and prints the combined text to stdout
pub fn combine_snippets(session: &Session, titles: &[String]) -> Result<()> {
    let payload = combine_titles(&session.loaded.snippets, &session.settings.launcher, titles)?;
    println!("{}", payload.text);
    Ok(())
}

/// Resolves each title and adds it to a fresh combination, in argument order
pub fn combine_titles(
    snippets: &SnippetCollection,
    config: &LauncherConfig,
    titles: &[String],
) -> Result<CombinedPayload> {
    let mut combination = CombinationController::new(config);

    for title in titles {
        let snippet = find_snippet(snippets, title)
            .ok_or_else(|| anyhow!("No snippet found with title: {}", title))?;
        combination.add_snippet(snippet).map_err(|err| {
            anyhow!(
                "Cannot add \"{}\" ({}): {}",
                snippet.title(),
                err.reason_code(),
                err
            )
        })?;
    }

    combination
        .execute_combination()
        .map_err(|err| anyhow!("Cannot combine ({}): {}", err.reason_code(), err))
}

/// Looks a snippet up by its exact title
pub fn find_snippet<'a>(snippets: &'a SnippetCollection, title: &str) -> Option<&'a Snippet> {
    snippets.iter().find(|s| s.title() == title)
}

fn print_snippet_row(idx: usize, snippet: &Snippet) {
    println!(
        "{}  {}. {} {}",
        GUTTER.bright_magenta(),
        (idx + 1).to_string().yellow(),
        snippet.title().bright_white(),
        format!("({} chars)", snippet.content_len()).dimmed()
    );
}
