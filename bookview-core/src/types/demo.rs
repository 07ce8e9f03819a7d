//! Fixed demo catalog used when no candidate source is reachable

use super::BookRecord;

const COVER_BASE: &str = "https://covers.openlibrary.org/b/isbn";
const SHOP_BASE: &str = "https://www.example-books.com/isbn";

/// (id, title, author, year, category, isbn or "" when the entry has no cover)
const DEMO: [(i64, &str, &str, i64, &str, &str); 10] = [
    (1, "Clean Code", "Robert C. Martin", 2008, "Software Engineering", "9780132350884"),
    (2, "The Pragmatic Programmer", "Andrew Hunt, David Thomas", 1999, "Software Engineering", "9780201616224"),
    (3, "Design Patterns", "Erich Gamma et al.", 1994, "Software Design", "9780201633610"),
    (4, "Refactoring", "Martin Fowler", 2018, "Software Engineering", ""),
    (5, "Introduction to Algorithms", "Thomas H. Cormen", 2009, "Algorithms", "9780262033848"),
    (6, "The Rust Programming Language", "Steve Klabnik, Carol Nichols", 2018, "Programming Languages", "9781593278281"),
    (7, "Designing Data-Intensive Applications", "Martin Kleppmann", 2017, "Distributed Systems", "9781449373320"),
    (8, "Structure and Interpretation of Computer Programs", "Harold Abelson", 1996, "Computer Science", ""),
    (9, "Fluent Python", "Luciano Ramalho", 2015, "Programming Languages", "9781491946008"),
    (10, "Python Crash Course", "Eric Matthes", 2015, "Programming Languages", "9781593276034"),
];

/// The demo dataset, in load order
pub fn demo_books() -> Vec<BookRecord> {
    DEMO.iter()
        .map(|&(id, title, author, year, category, isbn)| {
            let record = BookRecord::new()
                .with("id", id)
                .with("title", title)
                .with("author", author)
                .with("year", year)
                .with("category", category);
            if isbn.is_empty() {
                record.with("cover", "")
            } else {
                record
                    .with("cover", format!("{}/{}-M.jpg", COVER_BASE, isbn))
                    .with("buy", format!("{}/{}", SHOP_BASE, isbn))
            }
        })
        .collect()
}
