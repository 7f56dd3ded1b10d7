//! Core classification and conversion engine
//!
//! Pure functions over immutable values; the terminal frontend owns all I/O.

mod apply;
pub mod catalog;
mod classify;

#[cfg(test)]
mod proptests;

pub use apply::{convert, Conversion, ConvertError};
pub use catalog::{available, Op};
pub use classify::{classify, Classification, EmptyInput};
