use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ScanEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ScanEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Runs extract, transform and load; returns the number of URLs emitted.
    pub fn run(&self) -> Result<usize> {
        tracing::info!("Starting image URL scan");

        // Extract
        let source = self.pipeline.extract()?;
        tracing::info!("Read {} ({} bytes)", source.path, source.text.len());

        // Transform
        let harvest = self.pipeline.transform(source)?;
        tracing::info!(
            "Accepted {} of {} candidates",
            harvest.urls.len(),
            harvest.candidates_examined
        );

        // Load
        let emitted = self.pipeline.load(harvest)?;
        tracing::info!("Emitted {} URLs", emitted);

        Ok(emitted)
    }
}
