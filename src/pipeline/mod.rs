mod hybrid_pipeline;
#[cfg(test)]
mod tests;

pub use hybrid_pipeline::{HybridPipeline, RunSummary};
