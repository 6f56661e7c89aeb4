//! # Runner Crate
//!
//! Replays the action log against the catalog: narrows raw records into
//! typed actions, routes them to the command handlers, the query pipeline,
//! or the recommendation heuristics, and forwards one output record per
//! handled action to the result sink, in action order.
//!
//! ## Example Usage
//!
//! ```ignore
//! use runner::{Dispatcher, VecSink};
//!
//! let mut sink = VecSink::new();
//! Dispatcher::new(&mut catalog, &mut sink).run(&input.actions)?;
//!
//! for output in &sink.outputs {
//!     println!("{}: {}", output.id, output.message);
//! }
//! ```

pub mod action;
pub mod commands;
pub mod dispatcher;
pub mod messages;
pub mod sink;

// Re-export main types
pub use action::Action;
pub use dispatcher::Dispatcher;
pub use sink::{ActionOutput, ResultSink, VecSink};
