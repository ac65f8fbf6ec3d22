//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use serde::Serialize;

use shelf_core::{Book, LibraryStats};

/// Widest a text column may grow before it is truncated
const MAX_COLUMN_WIDTH: usize = 32;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print a single book
    pub fn print_book(&self, book: &Book) {
        match self.format {
            OutputFormat::Human => {
                println!("Title:  {}", book.title);
                println!("Author: {}", book.author);
                println!("Year:   {}", book.year);
                println!("Genre:  {}", book.genre);
                println!("Read:   {}", if book.read { "yes" } else { "no" });
            }
            OutputFormat::Json => print_json(book),
            OutputFormat::Quiet => println!("{}", book.title),
        }
    }

    /// Print a list of books
    ///
    /// `empty_message` is shown in human mode when there is nothing to list.
    pub fn print_books(&self, books: &[&Book], empty_message: &str) {
        match self.format {
            OutputFormat::Human => {
                if books.is_empty() {
                    println!("{}", empty_message);
                    return;
                }
                print!("{}", book_table(books));
                println!("\n{} book(s)", books.len());
            }
            OutputFormat::Json => print_json(&books),
            OutputFormat::Quiet => {
                for book in books {
                    println!("{}", book.title);
                }
            }
        }
    }

    /// Print library statistics
    pub fn print_stats(&self, stats: &LibraryStats) {
        match self.format {
            OutputFormat::Human => print!("{}", stats_text(stats)),
            OutputFormat::Json => print_json(stats),
            OutputFormat::Quiet => println!("{} {:.2}", stats.total, stats.percentage_read),
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print a warning (always to stderr, even in quiet mode)
    pub fn warning(&self, message: &str) {
        match self.format {
            OutputFormat::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({"status": "warning", "message": message})
                );
            }
            _ => eprintln!("⚠ {}", message),
        }
    }

    /// Check if we should prompt for confirmation
    pub fn should_prompt(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({ "message": msg }));
            }
            OutputFormat::Quiet => {}
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to encode JSON output: {}", e),
    }
}

/// Render books as an aligned text table, one line per book
pub fn book_table(books: &[&Book]) -> String {
    let rows: Vec<[String; 5]> = books
        .iter()
        .map(|b| {
            [
                truncate(&b.title, MAX_COLUMN_WIDTH),
                truncate(&b.author, MAX_COLUMN_WIDTH),
                b.year.to_string(),
                truncate(&b.genre, MAX_COLUMN_WIDTH),
                if b.read { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();

    let headers = ["Title", "Author", "Year", "Genre", "Read"];
    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut table = String::new();
    table.push_str(&format_row(&headers, &widths));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    table.push_str(&rule.join("-+-"));
    table.push('\n');
    for row in &rows {
        table.push_str(&format_row(row, &widths));
    }
    table
}

fn format_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect();
    format!("{}\n", padded.join(" | ").trim_end())
}

/// Render statistics the way the menu and `stats` command show them
pub fn stats_text(stats: &LibraryStats) -> String {
    format!(
        "Total Books: {}\nPercentage Read: {:.2}%\n",
        stats.total, stats.percentage_read
    )
}

/// Truncate a string to max characters, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
