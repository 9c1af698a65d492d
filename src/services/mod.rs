pub mod display_pipeline;

pub use display_pipeline::DisplayPipeline;
