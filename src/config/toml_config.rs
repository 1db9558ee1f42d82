use crate::core::ConfigProvider;
use crate::domain::model::Shift;
use crate::utils::error::{CipherError, Result};
use crate::utils::validation::{validate_file_extension, validate_no_control_chars, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub message: MessageConfig,
    pub cipher: CipherConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageConfig {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CipherConfig {
    pub shift: Shift,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        validate_file_extension("config", path.as_ref(), &["toml"])?;
        let content = std::fs::read_to_string(&path).map_err(CipherError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// 是否啟用詳細日誌
    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn message(&self) -> &str {
        &self.message.text
    }

    fn shift(&self) -> Shift {
        self.cipher.shift
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_no_control_chars("message.text", &self.message.text)?;
        Ok(())
    }
}
