//! Core types: book records and their field values

mod demo;
mod record;
mod value;

pub use demo::demo_books;
pub use record::BookRecord;
pub use value::FieldValue;
