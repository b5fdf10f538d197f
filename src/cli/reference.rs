//! Render the token kind registry as Markdown.
//!
//! The output is a derived artifact: regenerate it with `lexkind reference --output <PATH>` instead of editing it by
//! hand.

use lexkind_core::{KindCategory, TokenKind};

/// Lowercase label for a category, as shown in listings and the reference.
pub fn category_label(category: KindCategory) -> &'static str {
    match category {
        KindCategory::Plain => "plain",
        KindCategory::Symbol => "symbol",
        KindCategory::Keyword => "keyword",
    }
}

/// Describe a kind's grouping role, or `""` if it has none.
pub fn grouping_label(kind: TokenKind) -> String {
    if kind.is_opening_symbol() {
        format!("opens, closed by {}", kind.closing_symbol())
    } else if kind.is_closing_symbol() {
        format!("closes, opened by {}", kind.opening_symbol())
    } else {
        String::new()
    }
}

/// Render the full Markdown reference.
pub fn render() -> String {
    let mut out = String::new();
    out.push_str("# Token kind reference\n\n");
    out.push_str("!!! warning \"Generated file\"\n");
    out.push_str("    Do not edit this page by hand.\n");
    out.push_str("    Regenerate with: `lexkind reference --output <PATH>`\n\n");

    out.push_str("## Contents\n\n");
    out.push_str("- [Grouping pairs](#grouping-pairs)\n");
    out.push_str("- [Symbols](#symbols)\n");
    out.push_str("- [Keywords](#keywords)\n");
    out.push_str("- [All token kinds](#all-token-kinds)\n");

    render_grouping_section(&mut out);
    render_spelled_section(&mut out, "## Symbols", KindCategory::Symbol);
    render_spelled_section(&mut out, "## Keywords", KindCategory::Keyword);
    render_all_kinds_section(&mut out);

    trim_trailing_newlines_to_at_most_two(&mut out);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn render_grouping_section(out: &mut String) {
    start_section(out, "## Grouping pairs");

    out.push_str("| Opening | Spelling | Closing | Spelling |\n");
    out.push_str("|---|---|---|---|\n");
    for open in TokenKind::all().filter(|k| k.is_opening_symbol()) {
        let close = open.closing_symbol();
        out.push_str(&format!(
            "| {open} | {} | {close} | {} |\n",
            md_code(open.fixed_spelling()),
            md_code(close.fixed_spelling())
        ));
    }
}

fn render_spelled_section(out: &mut String, heading: &str, category: KindCategory) {
    start_section(out, heading);

    out.push_str("| Name | Spelling |\n");
    out.push_str("|---|---|\n");
    for kind in TokenKind::all().filter(|k| k.category() == category) {
        out.push_str(&format!("| {kind} | {} |\n", md_code(kind.fixed_spelling())));
    }
}

fn render_all_kinds_section(out: &mut String) {
    start_section(out, "## All token kinds");

    out.push_str("| Tag | Name | Category | Spelling | Grouping |\n");
    out.push_str("|---:|---|---|---|---|\n");
    for kind in TokenKind::all() {
        let spelling = md_code(kind.fixed_spelling());
        out.push_str(&format!(
            "| {} | {kind} | {} | {spelling} | {} |\n",
            kind.tag(),
            category_label(kind.category()),
            grouping_label(kind)
        ));
    }
}

/// Wrap a spelling in a code span that survives inside a table cell.
fn md_code(spelling: &str) -> String {
    if spelling.is_empty() {
        return String::new();
    }
    format!("`{}`", spelling.replace('|', "\\|"))
}

fn trim_trailing_newlines_to_at_most_two(out: &mut String) {
    let count = out.chars().rev().take_while(|&ch| ch == '\n').count();
    for _ in 2..count {
        out.pop();
    }
}

fn ensure_single_blank_line(out: &mut String) {
    trim_trailing_newlines_to_at_most_two(out);
    if out.is_empty() || out.ends_with("\n\n") {
        return;
    }
    if out.ends_with('\n') {
        out.push('\n');
    } else {
        out.push_str("\n\n");
    }
}

fn start_section(out: &mut String, heading: &str) {
    ensure_single_blank_line(out);
    out.push_str(heading);
    out.push_str("\n\n");
}
