//! The seam between the catalog runner and report output

use std::io;

use crate::catalog::QueryOutcome;

/// Destination for query outcomes
pub trait ReportSink {
    /// Render one query's outcome
    fn emit(&mut self, name: &str, outcome: &QueryOutcome) -> io::Result<()>;

    /// Called once after the last outcome of a run
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn emit(&mut self, name: &str, outcome: &QueryOutcome) -> io::Result<()> {
        (**self).emit(name, outcome)
    }

    fn finish(&mut self) -> io::Result<()> {
        (**self).finish()
    }
}
