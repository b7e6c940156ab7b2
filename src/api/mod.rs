mod engine;
mod engine_config;
pub mod presets;

pub use engine::TrendEngine;
pub use engine_config::TrendEngineConfig;
