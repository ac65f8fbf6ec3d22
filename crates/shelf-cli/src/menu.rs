//! Interactive menu
//!
//! The default mode when `shelf` runs without a subcommand:
//!
//! ```text
//!   [1] Add a Book
//!   [2] Remove a Book
//!   [3] Search for a Book
//!   [4] Display All Books
//!   [5] Display Statistics
//!   [6] Exit
//! ```
//!
//! Required fields are checked here before the catalog is touched. Catalog
//! errors are reported and the menu keeps going. End of input behaves like
//! Exit, so the library is always flushed before the process stops.

use std::io::{BufRead, Write};

use anyhow::Result;
use shelf_core::{Book, Catalog, CatalogError, MAX_YEAR, MIN_YEAR};

use crate::output::{book_table, stats_text};
use crate::prompt::{is_yes, read_field};

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Remove,
    Search,
    List,
    Statistics,
    Exit,
}

impl Action {
    const ALL: [Action; 6] = [
        Action::Add,
        Action::Remove,
        Action::Search,
        Action::List,
        Action::Statistics,
        Action::Exit,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::Add => "Add a Book",
            Action::Remove => "Remove a Book",
            Action::Search => "Search for a Book",
            Action::List => "Display All Books",
            Action::Statistics => "Display Statistics",
            Action::Exit => "Exit",
        }
    }

    /// Accepts the menu number or the first word of the label
    fn parse(choice: &str) -> Option<Self> {
        let choice = choice.trim().to_lowercase();
        if let Ok(n) = choice.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied());
        }
        Self::ALL.into_iter().find(|a| {
            a.label()
                .split_whitespace()
                .next()
                .is_some_and(|word| word.eq_ignore_ascii_case(&choice))
        })
    }
}

/// Prompt-driven front end over a [`Catalog`]
pub struct Menu<'a, R, W> {
    catalog: &'a mut Catalog,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(catalog: &'a mut Catalog, input: R, out: W) -> Self {
        Self {
            catalog,
            input,
            out,
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "📚 Personal Library Manager")?;

        loop {
            writeln!(self.out)?;
            for (i, action) in Action::ALL.iter().enumerate() {
                writeln!(self.out, "  [{}] {}", i + 1, action.label())?;
            }

            let Some(choice) = self.field("> ")? else {
                return self.exit();
            };

            match Action::parse(&choice) {
                Some(Action::Add) => self.add()?,
                Some(Action::Remove) => self.remove()?,
                Some(Action::Search) => self.search()?,
                Some(Action::List) => self.list()?,
                Some(Action::Statistics) => self.statistics()?,
                Some(Action::Exit) => return self.exit(),
                None => writeln!(self.out, "Invalid choice. Enter a number from 1 to 6.")?,
            }
        }
    }

    fn field(&mut self, label: &str) -> Result<Option<String>> {
        Ok(read_field(&mut self.input, &mut self.out, label)?)
    }

    /// Ask for a year until it parses and is in range
    fn year(&mut self) -> Result<Option<i32>> {
        let label = format!("Publication Year ({}-{}): ", MIN_YEAR, MAX_YEAR);
        loop {
            let Some(raw) = self.field(&label)? else {
                return Ok(None);
            };
            match raw.parse::<i32>() {
                Ok(year) if (MIN_YEAR..=MAX_YEAR).contains(&year) => return Ok(Some(year)),
                _ => writeln!(
                    self.out,
                    "Please enter a year between {} and {}.",
                    MIN_YEAR, MAX_YEAR
                )?,
            }
        }
    }

    fn add(&mut self) -> Result<()> {
        writeln!(self.out, "\n── Add a Book ──")?;

        let Some(title) = self.field("Title: ")? else {
            return Ok(());
        };
        let Some(author) = self.field("Author: ")? else {
            return Ok(());
        };
        let Some(year) = self.year()? else {
            return Ok(());
        };
        let Some(genre) = self.field("Genre: ")? else {
            return Ok(());
        };
        let Some(read) = self.field("Have you read it? [y/N] ")? else {
            return Ok(());
        };

        if title.is_empty() || author.is_empty() || genre.is_empty() {
            writeln!(self.out, "Please fill in all fields.")?;
            return Ok(());
        }

        let book = Book::new(title, author, year, genre).with_read(is_yes(&read));
        match self.catalog.add_book(book) {
            Ok(()) => writeln!(self.out, "Book added successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        writeln!(self.out, "\n── Remove a Book ──")?;

        let Some(title) = self.field("Enter the title of the book to remove: ")? else {
            return Ok(());
        };
        if title.is_empty() {
            writeln!(self.out, "Please enter a title.")?;
            return Ok(());
        }

        match self.catalog.remove_book(&title) {
            Ok(1) => writeln!(self.out, "Book '{}' removed successfully!", title)?,
            Ok(n) => writeln!(
                self.out,
                "Book '{}' removed successfully! ({} copies)",
                title, n
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        writeln!(self.out, "\n── Search for a Book ──")?;

        let Some(query) = self.field("Enter title or author to search: ")? else {
            return Ok(());
        };
        if query.is_empty() {
            writeln!(self.out, "Please enter a title or author.")?;
            return Ok(());
        }

        let results = self.catalog.search_books(&query);
        if results.is_empty() {
            writeln!(self.out, "No matching books found.")?;
        } else {
            writeln!(self.out, "Search Results:")?;
            write!(self.out, "{}", book_table(&results))?;
        }
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        writeln!(self.out, "\n── All Books in Library ──")?;

        if self.catalog.is_empty() {
            writeln!(self.out, "The library is empty.")?;
        } else {
            let books: Vec<&Book> = self.catalog.books().iter().collect();
            write!(self.out, "{}", book_table(&books))?;
        }
        Ok(())
    }

    fn statistics(&mut self) -> Result<()> {
        writeln!(self.out, "\n── Library Statistics ──")?;
        write!(self.out, "{}", stats_text(&self.catalog.statistics()))?;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        if let Err(e) = self.catalog.flush() {
            self.report(&e)?;
        }
        writeln!(self.out, "Thank you for using the Personal Library Manager!")?;
        Ok(())
    }

    fn report(&mut self, err: &CatalogError) -> Result<()> {
        match err {
            CatalogError::Validation(e) => writeln!(self.out, "Error: {}", e)?,
            CatalogError::NotFound { .. } => writeln!(self.out, "{}", err)?,
            CatalogError::StorageRead(_) | CatalogError::StorageWrite(_) => {
                writeln!(self.out, "Warning: {}", err)?;
                if err.is_durability_warning() {
                    writeln!(self.out, "The change is kept for this session but may not be saved.")?;
                }
                if let Some(hint) = err.recovery_suggestion() {
                    writeln!(self.out, "{}", hint)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::TempDir;

    /// Feed `script` to a menu over the library at `path`, returning the transcript
    fn run_script(path: &Path, script: &str) -> String {
        let mut catalog = Catalog::open_at(path).unwrap();
        let mut out = Vec::new();
        Menu::new(&mut catalog, Cursor::new(script.to_string()), &mut out)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(Action::parse("1"), Some(Action::Add));
        assert_eq!(Action::parse(" 6 "), Some(Action::Exit));
        assert_eq!(Action::parse("search"), Some(Action::Search));
        assert_eq!(Action::parse("Display"), Some(Action::List));
        assert_eq!(Action::parse("0"), None);
        assert_eq!(Action::parse("7"), None);
        assert_eq!(Action::parse("borrow"), None);
    }

    #[test]
    fn test_add_book_and_exit() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library.txt");

        let transcript = run_script(&path, "1\nDune\nHerbert\n1965\nSci-Fi\nn\n6\n");

        assert!(transcript.contains("Book added successfully!"));
        assert!(transcript.contains("Thank you for using the Personal Library Manager!"));

        let catalog = Catalog::open_at(&path).unwrap();
        assert_eq!(catalog.books(), &[Book::new("Dune", "Herbert", 1965, "Sci-Fi")]);
    }

    #[test]
    fn test_add_reprompts_for_bad_year() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library.txt");

        let transcript = run_script(&path, "1\nEmma\nAusten\nlong ago\n1700\n1815\nRomance\ny\n6\n");

        assert_eq!(
            transcript.matches("Please enter a year between 1800 and 2100.").count(),
            2
        );
        let catalog = Catalog::open_at(&path).unwrap();
        assert_eq!(catalog.books()[0].year, 1815);
        assert!(catalog.books()[0].read);
    }

    #[test]
    fn test_add_with_missing_field_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library.txt");

        let transcript = run_script(&path, "1\nDune\n\n1965\nSci-Fi\nn\n6\n");

        assert!(transcript.contains("Please fill in all fields."));
        assert!(Catalog::open_at(&path).unwrap().is_empty());
    }

    #[test]
    fn test_remove_reports_missing_title() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library.txt");

        let transcript = run_script(&path, "2\nDune\n2\n\n6\n");

        assert!(transcript.contains("Book 'Dune' not found in the library."));
        assert!(transcript.contains("Please enter a title."));
    }

    #[test]
    fn test_search_list_and_statistics() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library.txt");
        {
            let mut catalog = Catalog::open_at(&path).unwrap();
            catalog
                .add_book(Book::new("Dune", "Herbert", 1965, "Sci-Fi"))
                .unwrap();
            catalog
                .add_book(Book::new("1984", "Orwell", 1949, "Dystopian").with_read(true))
                .unwrap();
        }

        let transcript = run_script(&path, "3\norwell\n3\ntolkien\n4\n5\n6\n");

        assert!(transcript.contains("Search Results:"));
        assert!(transcript.contains("1984  | Orwell"));
        assert!(transcript.contains("No matching books found."));
        assert!(transcript.contains("Dune  | Herbert"));
        assert!(transcript.contains("Total Books: 2\nPercentage Read: 50.00%"));
    }

    #[test]
    fn test_list_empty_library() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library.txt");

        let transcript = run_script(&path, "4\n6\n");

        assert!(transcript.contains("The library is empty."));
    }

    #[test]
    fn test_end_of_input_flushes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library.txt");

        let transcript = run_script(&path, "");

        assert!(transcript.contains("Thank you for using the Personal Library Manager!"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Title,Author,Publication Year,Genre,Read Status\n"
        );
    }

    #[test]
    fn test_invalid_choice() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library.txt");

        let transcript = run_script(&path, "9\n6\n");

        assert!(transcript.contains("Invalid choice."));
    }
}
