//! Synthetic employee record generator
//!
//! Produces reproducible records from an explicit seed. The random source
//! is owned by the generator and never global, so the same seed and count
//! always yield the same records.

mod generator;

pub use generator::{EmployeeGenerator, DEPARTMENTS, MANAGERS, POSITIONS};
