//! Common error types used across all dashboard crates
//!
//! Panels never fail: missing data renders as nothing. These errors cover
//! the layers around them (feed adapters, chart drawing, JS interop).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for dashboard operations
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum DashboardError {
    // Data-related errors
    #[error("Data parse error: {message}")]
    DataParse {
        message: String,
        field: Option<String>,
    },

    #[error("Unsupported range: {range}")]
    UnsupportedRange { range: String },

    // Chart errors
    #[error("Chart module failed to load: {message}")]
    ChartLoad { message: String },

    #[error("Chart draw failed: {message}")]
    ChartDraw { message: String },

    #[error("Mount target not found: {id}")]
    MountTargetNotFound { id: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    // WASM-specific errors
    #[error("JavaScript interop error: {message}")]
    JsInterop { message: String },
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

impl DashboardError {
    pub fn parse_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        DashboardError::DataParse {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::DataParse {
            message: err.to_string(),
            field: None,
        }
    }
}

/// Error response structure for JavaScript interop
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: DashboardError,
    pub timestamp: u64,
    pub context: Option<ErrorContext>,
}

/// Additional context for error reporting
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
}

impl ErrorResponse {
    pub fn new(error: DashboardError) -> Self {
        Self {
            success: false,
            error,
            timestamp: chrono::Utc::now().timestamp_millis() as u64,
            context: None,
        }
    }

    pub fn with_context(mut self, component: &str, operation: &str) -> Self {
        self.context = Some(ErrorContext {
            component: component.to_string(),
            operation: operation.to_string(),
        });
        self
    }

    /// Convert to JSON string for JavaScript
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"error":{"type":"JsInterop","details":{"message":"Failed to serialize error"}}}"#.to_string()
        })
    }
}
