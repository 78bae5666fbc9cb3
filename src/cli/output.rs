//! Colored terminal output for the catalog commands.
//!
//! `colored` honours NO_COLOR and CLICOLOR_FORCE.

use std::fmt::Display;

use colored::Colorize;

pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub fn success(msg: &(impl Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Section title: a category, or a pattern about to run.
pub fn heading(title: &(impl Display + ?Sized)) {
    println!("{}", title.to_string().cyan().bold());
}

/// `label: value` line, used by `show` and `config path`.
pub fn field(label: &str, value: &(impl Display + ?Sized)) {
    println!("{}: {}", label.green(), value);
}

/// One catalog listing row, names aligned to the longest pattern name.
pub fn pattern_row(name: &str, summary: &str) {
    println!("  {:<24} {}", name.yellow(), summary);
}

/// A line produced by a demonstration, indented under its heading.
pub fn demo_line(line: &str) {
    println!("  {line}");
}

/// Uncolored data: trees, TOML, evaluation results.
pub fn plain(data: &(impl Display + ?Sized)) {
    println!("{data}");
}

pub fn blank() {
    println!();
}
