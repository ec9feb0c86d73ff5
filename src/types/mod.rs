//! Types which are used throughout the library.

pub mod err;
