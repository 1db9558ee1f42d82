use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct CipherEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CipherEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting decode process...");

        // Source
        let message = self.pipeline.source()?;
        tracing::info!("Sourced message ({} characters)", message.text.chars().count());

        // Transform
        let decoded = self.pipeline.transform(message)?;
        tracing::info!("Transformed message (shift {})", decoded.shift);

        // Emit
        let report = self.pipeline.emit(decoded)?;
        tracing::info!("Report written ({} bytes)", report.len());

        Ok(report)
    }
}
