//! Frontend Error Types

use thiserror::Error;

/// Errors surfaced by stores and command wrappers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Rejected locally; no backend call was made
    #[error("{0}")]
    Validation(String),

    /// The backend command failed
    #[error("backend error: {0}")]
    Backend(String),

    /// Arguments or response could not be converted
    #[error("decode error: {0}")]
    Decode(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<serde_wasm_bindgen::Error> for AppError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        AppError::Decode(e.to_string())
    }
}

impl AppError {
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

/// Reject empty or whitespace-only names, returning the trimmed name
pub fn validate_name(name: &str) -> AppResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Folder name cannot be empty".to_string()));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("  Work "), Ok("Work"));
        assert!(validate_name("").unwrap_err().is_validation());
        assert!(validate_name(" \t\n").unwrap_err().is_validation());
    }

    #[test]
    fn test_display() {
        let e = AppError::Backend("Folder not found".into());
        assert_eq!(e.to_string(), "backend error: Folder not found");
    }
}
