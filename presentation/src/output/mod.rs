//! Terminal output formatting

pub mod bubble;
