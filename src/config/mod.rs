pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::Shift;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_no_control_chars, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// 內建範例密文,不帶參數執行時解碼它
pub const DEFAULT_MESSAGE: &str = "DQQ LV WKH JXDUGLDQ RI WKH FRGHV.";
pub const DEFAULT_SHIFT: &str = "3";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "caesar-decoder")]
#[command(about = "A small CLI for decoding Caesar-cipher messages")]
pub struct CliConfig {
    /// Ciphertext to decode
    #[arg(long, default_value = DEFAULT_MESSAGE)]
    pub message: String,

    /// Shift the message was encrypted with; decoding rotates the other way
    #[arg(long, default_value = DEFAULT_SHIFT, allow_hyphen_values = true)]
    pub shift: Shift,

    /// Path to a TOML configuration file; when set it supplies message and shift
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn message(&self) -> &str {
        &self.message
    }

    fn shift(&self) -> Shift {
        self.shift
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_no_control_chars("message", &self.message)?;
        Ok(())
    }
}
