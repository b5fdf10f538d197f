//! CLI command implementations
//!
//! Commands render their output to a `String` so they can be tested without a process; `print` and
//! `write_reference` are the only functions that touch stdout or the filesystem.

use std::fs;
use std::path::Path;

use lexkind_core::registry::{Registry, TOKEN_KINDS};
use lexkind_core::{KindCategory, TokenKind};

use super::reference::{self, category_label, grouping_label};
use super::{CliError, CliResult, ExitCode};

/// Print rendered command output.
pub fn print(text: &str) -> CliResult<ExitCode> {
    println!("{text}");
    Ok(ExitCode::SUCCESS)
}

/// Render the Markdown reference to `output`, or to stdout when no path is given.
pub fn write_reference(output: Option<&Path>) -> CliResult<ExitCode> {
    let rendered = reference::render();
    match output {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir)
                    .map_err(|e| CliError::failure(format!("Error creating {}: {e}", dir.display())))?;
            }
            fs::write(path, rendered)
                .map_err(|e| CliError::failure(format!("Error writing {}: {e}", path.display())))?;
            tracing::info!(path = %path.display(), "wrote token kind reference");
        }
        None => print!("{rendered}"),
    }
    Ok(ExitCode::SUCCESS)
}

/// List every kind in declaration order, as an aligned text table or as JSON.
pub fn list(json: bool) -> CliResult<String> {
    if json {
        let kinds: Vec<serde_json::Value> = TokenKind::all().map(kind_json).collect();
        return serde_json::to_string_pretty(&kinds)
            .map_err(|e| CliError::failure(format!("Error serializing token kinds: {e}")));
    }

    let lines: Vec<String> = TokenKind::all()
        .map(|kind| {
            let line = format!(
                "{:>3}  {:<20} {:<8} {:<10} {}",
                kind.tag(),
                kind.name(),
                category_label(kind.category()),
                kind.fixed_spelling(),
                grouping_label(kind)
            );
            line.trim_end().to_string()
        })
        .collect();
    Ok(lines.join("\n"))
}

/// Describe the kind registered under `name`.
pub fn show(name: &str) -> CliResult<String> {
    let Some(kind) = TokenKind::from_name(name) else {
        return Err(CliError::failure(format!("Error: unknown token kind `{name}`")));
    };

    let mut lines = vec![
        format!("name:      {kind}"),
        format!("tag:       {}", kind.tag()),
        format!("category:  {}", category_label(kind.category())),
    ];
    let spelling = kind.fixed_spelling();
    if spelling.is_empty() {
        lines.push("spelling:  (varies)".to_string());
    } else {
        lines.push(format!("spelling:  {spelling:?}"));
    }
    if kind.is_grouping_symbol() {
        lines.push(format!("grouping:  {}", grouping_label(kind)));
    }
    Ok(lines.join("\n"))
}

/// Resolve an exact fixed spelling to its kind.
pub fn lookup(spelling: &str) -> CliResult<String> {
    match TokenKind::from_fixed_spelling(spelling) {
        Some(kind) => Ok(format!("{kind} ({})", category_label(kind.category()))),
        None => Err(CliError::failure(format!(
            "Error: no token kind is spelled {spelling:?}"
        ))),
    }
}

/// Derive the registry from its table and summarize it.
///
/// Unlike the process-wide registry, which aborts on a bad table, this reports the fault as a CLI error.
pub fn check() -> CliResult<String> {
    let registry = Registry::build(TOKEN_KINDS)
        .and_then(Registry::ensure_complete)
        .map_err(|e| CliError::failure(format!("Error: token kind registry is invalid: {e}")))?;

    let count = |category: KindCategory| {
        registry
            .kinds()
            .iter()
            .filter(|&&k| registry.category(k) == category)
            .count()
    };
    let summary = format!(
        "registry ok: {} kinds ({} symbols, {} keywords, {} grouping pairs)",
        registry.len(),
        count(KindCategory::Symbol),
        count(KindCategory::Keyword),
        registry.pair_count()
    );
    tracing::info!(kinds = registry.len(), "token kind registry validated");
    Ok(summary)
}

fn kind_json(kind: TokenKind) -> serde_json::Value {
    let spelling = Some(kind.fixed_spelling()).filter(|s| !s.is_empty());
    serde_json::json!({
        "tag": kind.tag(),
        "name": kind.name(),
        "category": category_label(kind.category()),
        "spelling": spelling,
        "opening": kind.is_opening_symbol(),
        "closing": kind.is_closing_symbol(),
        "partner": kind.grouping_partner().map(|p| p.name()),
    })
}
