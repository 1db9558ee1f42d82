use crate::domain::ports::Sink;
use crate::utils::error::Result;
use std::io::Write;

/// The production sink: writes the report to standard output.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for ConsoleSink {
    fn write_report(&self, report: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(report.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
