//! # row_sort
//!
//! Sorts the integers on each line of a text file.
//!
//! Input is read one record per line (whitespace-separated integers), each
//! record is sorted ascending with selection sort, and the records are
//! written back out one per line in their original order. Lines that start
//! with a non-integer token are dropped; a bad token mid-line truncates that
//! line at the last valid integer.
mod error;
mod pipeline;
mod sort;

pub use error::PipelineError;
pub use pipeline::{read_input, write_output, Dataset, Record};
pub use sort::{selection_sort, sort_dataset};
