//! Query catalog for roster
//!
//! A fixed, enumerable set of named read-only queries over a `RecordStore`.
//!
//! # Design Principles
//!
//! 1. Queries are pure: same store and context, same value
//! 2. The store is never mutated
//! 3. Ties resolve to the first record in store order, or the smallest key
//!    for grouped results
//! 4. One failing query never stops the others
//!
//! # Layout
//!
//! - `filters`, `grouping`, `extrema`, `sorter`, `stats`: building blocks
//! - `queries`: typed queries composed from the building blocks
//! - `registry`: the named catalog, each entry rendering a JSON value
//! - `runner`: executes entries and hands outcomes to a report sink

mod context;
mod errors;
mod extrema;
mod filters;
pub mod grouping;
pub mod queries;
mod registry;
mod result;
mod runner;
mod sorter;
pub mod stats;

pub use context::QueryContext;
pub use errors::{QueryError, QueryResult, RunError};
pub use extrema::{first_max_by, first_min_by};
pub use filters::{Predicate, PredicateFilter};
pub use registry::{Catalog, Category, QueryDef, QueryFn};
pub use result::{QueryOutcome, RunSummary};
pub use runner::QueryRunner;
pub use sorter::{RecordSorter, SortDirection, SortKey, SortSpec};
