use crate::utils::error::{CipherError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_file_extension(
    field_name: &str,
    path: &Path,
    allowed_extensions: &[&str],
) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(extension) if allowed_extensions.contains(&extension) => Ok(()),
        Some(extension) => Err(CipherError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(CipherError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

/// 密文可以是空字串,但控制字元會破壞單行輸出格式
pub fn validate_no_control_chars(field_name: &str, value: &str) -> Result<()> {
    if value.chars().any(|c| c.is_control()) {
        return Err(CipherError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value contains control characters".to_string(),
        });
    }
    Ok(())
}
