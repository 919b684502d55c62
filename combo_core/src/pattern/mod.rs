//! Patterns - the numeric signature of a kill window and the table of
//! registered combos.
//!
//! A window of recent kills is condensed into a single decimal number (the
//! pattern code) whose digits describe the *shape* of repetition rather than
//! the concrete elements involved. Named combos are registrations of
//! (length, code, name) in a table built once at startup and immutable for
//! the rest of the session.

mod code;
mod table;

pub use code::*;
pub use table::*;
