//! Terminal and JSON rendering for command results.
//!
//! In JSON mode only [`Output::json`] and [`Output::error`] write anything,
//! so stdout stays a single parseable document.

use console::{style, StyledObject};
use parts_commerce::catalog::StockStatus;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Human { verbose: bool },
    Json,
}

/// Where command results and status lines go.
#[derive(Debug, Clone)]
pub struct Output {
    mode: Mode,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        let mode = if json {
            Mode::Json
        } else {
            Mode::Human { verbose }
        };
        Self { mode }
    }

    pub fn is_json(&self) -> bool {
        self.mode == Mode::Json
    }

    fn is_human(&self) -> bool {
        !self.is_json()
    }

    fn status(&self, mark: StyledObject<&str>, msg: &str) {
        if self.is_human() {
            println!("{} {}", mark, msg);
        }
    }

    pub fn info(&self, msg: &str) {
        self.status(style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        self.status(style("✓").green(), msg);
    }

    /// Warnings go to stderr so they never mix with tables on stdout.
    pub fn warn(&self, msg: &str) {
        if self.is_human() {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Errors are written in both modes; JSON mode emits `{"error": ...}`.
    pub fn error(&self, msg: &str) {
        match self.mode {
            Mode::Json => eprintln!("{}", serde_json::json!({ "error": msg })),
            Mode::Human { .. } => eprintln!("{} {}", style("✗").red(), style(msg).red()),
        }
    }

    /// Diagnostics shown only with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if let Mode::Human { verbose: true } = self.mode {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    /// Section title, preceded by a blank line.
    pub fn header(&self, title: &str) {
        if self.is_human() {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Pretty-printed JSON document on stdout.
    pub fn json<T: Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => self.error(&format!("Failed to encode output: {}", e)),
        }
    }

    /// Indented `label: value` line.
    pub fn kv(&self, label: &str, value: &str) {
        if self.is_human() {
            println!("  {}: {}", style(label).dim(), value);
        }
    }

    pub fn list_item(&self, item: &str) {
        if self.is_human() {
            println!("  {} {}", style("•").dim(), item);
        }
    }

    /// Unstyled text, e.g. a multi-line part summary.
    pub fn text(&self, body: &str) {
        if self.is_human() {
            println!("{}", body);
        }
    }

    /// Left-aligned columns padded to `widths`.
    pub fn table_row(&self, cells: &[&str], widths: &[usize]) {
        if self.is_json() {
            return;
        }
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ");
        println!("  {}", line.trim_end());
    }

    /// Blank separator line.
    pub fn blank(&self) {
        if self.is_human() {
            println!();
        }
    }
}

/// Availability label coloured by severity.
pub fn stock_badge(status: StockStatus) -> String {
    let label = style(status.label());
    match status {
        StockStatus::InStock => label.green(),
        StockStatus::LowStock => label.yellow(),
        StockStatus::OutOfStock => label.red(),
    }
    .to_string()
}
