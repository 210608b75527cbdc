pub mod engine_config;
pub mod env;
pub mod logging;

pub use engine_config::EngineConfig;
pub use logging::PipelineLogger;
