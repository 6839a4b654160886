//! roster - employee record generator and query catalog
//!
//! Generates synthetic employee CSVs, ingests them into an immutable
//! in-memory store and runs a fixed catalog of named analytical queries.

pub mod catalog;
pub mod cli;
pub mod generator;
pub mod observability;
pub mod record;
pub mod report;
pub mod store;
