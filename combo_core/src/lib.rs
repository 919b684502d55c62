//! # Combo Core
//!
//! The combo engine for FIFO. This crate watches the stream of kill events,
//! keeps a short window of the most recent element types, and recognizes
//! named patterns within that window - a poker-hand evaluator over the last
//! few kills.
//!
//! ## Core Components
//!
//! - **pattern**: the numeric pattern code and the registered pattern table
//! - **recognizer**: the kill-history window and the matcher that reads it
//! - **tracker**: the per-session object hosts drive with game events
//!
//! ## Design Philosophy
//!
//! - **Data-Driven**: patterns are registrations in a table, never hard-coded logic
//! - **Event-Driven**: the engine reacts to kill events, it never polls the game
//! - **Session-Scoped**: one tracker per run, passed explicitly, no globals

pub mod events;
pub mod pattern;
pub mod recognizer;
pub mod tracker;

pub use events::*;
pub use pattern::*;
pub use recognizer::*;
pub use tracker::*;
