//! Report sinks
//!
//! Every catalog entry's outcome is handed to a `ReportSink` exactly once
//! per run, in catalog order. Sinks decide how to render it.
//!
//! # Design Principles
//!
//! 1. Sinks never see the store, only outcomes
//! 2. A failed query is reported like any other result
//! 3. Write errors propagate; query errors do not

mod json;
mod memory;
mod sink;
mod text;

pub use json::JsonLinesSink;
pub use memory::MemorySink;
pub use sink::ReportSink;
pub use text::TextSink;
