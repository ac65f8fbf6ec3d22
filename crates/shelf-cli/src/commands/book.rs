//! Book command handlers

use anyhow::{Context, Result};

use shelf_core::{Book, Catalog};

use crate::output::Output;
use crate::prompt::confirm;

/// Add a new book
pub fn add(catalog: &mut Catalog, book: Book, output: &Output) -> Result<()> {
    catalog
        .add_book(book.clone())
        .context("Failed to add book")?;

    output.success(&format!("Added '{}' by {}", book.title, book.author));
    output.print_book(&book);

    Ok(())
}

/// Remove every book with exactly this title
pub fn remove(catalog: &mut Catalog, title: String, output: &Output) -> Result<()> {
    let copies = catalog.count_title(&title);

    // Confirm removal (a missing title falls through to the NotFound error)
    if copies > 0 && output.should_prompt() {
        let prompt = if copies == 1 {
            format!("Remove '{}'?", title)
        } else {
            format!("Remove all {} copies of '{}'?", copies, title)
        };
        if !confirm(&prompt)? {
            output.message("Cancelled.");
            return Ok(());
        }
    }

    let removed = catalog
        .remove_book(&title)
        .context("Failed to remove book")?;

    output.success(&format!("Removed {} book(s) titled '{}'", removed, title));

    Ok(())
}

/// Search titles and authors
pub fn search(catalog: &Catalog, query: String, output: &Output) -> Result<()> {
    let books = catalog.search_books(&query);
    output.print_books(&books, "No matching books found.");
    Ok(())
}

/// List all books
pub fn list(catalog: &Catalog, output: &Output) -> Result<()> {
    let books: Vec<&Book> = catalog.books().iter().collect();
    output.print_books(&books, "The library is empty.");
    Ok(())
}
