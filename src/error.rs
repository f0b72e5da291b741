//! Error types for the dresser_palette library

use thiserror::Error;

/// Result type alias for dresser_palette operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Error types for palette extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Image could not be fetched or decoded
    #[error("Failed to load image: {message}")]
    LoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },
}

impl ExtractError {
    /// Create a load error with context
    pub fn load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::LoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a load error without an underlying cause
    pub fn load_message(message: impl Into<String>) -> Self {
        Self::LoadError {
            message: message.into(),
            source: None,
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error came from fetching or decoding the image
    pub fn is_load_error(&self) -> bool {
        matches!(self, ExtractError::LoadError { .. })
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ExtractError::LoadError { .. } => {
                "Could not load the image. Please check the link or file and try again.".to_string()
            }
            ExtractError::InvalidParameter { parameter, .. } => {
                format!("The palette request has an invalid '{}' setting.", parameter)
            }
        }
    }
}
