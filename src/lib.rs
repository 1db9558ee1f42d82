pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::cli::ConsoleSink;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{cipher, engine::CipherEngine, pipeline::ConsolePipeline};
pub use crate::utils::error::{CipherError, Result};
