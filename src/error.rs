use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorInfo,
}

#[derive(Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable code for this error class.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn details(&self) -> &Value {
        match self {
            AppError::Validation { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::Internal { details, .. } => details,
        }
    }

    /// Converts the error into the JSON body printed by `--json` output.
    pub fn into_body(self) -> ErrorBody {
        let code = self.code();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Internal { message, details } => (message, details),
        };

        ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        }
    }
}

pub fn map_io_error(e: std::io::Error, path: &str) -> AppError {
    AppError::internal(
        "Failed to read catalog",
        json!({ "path": path, "reason": e.to_string() }),
    )
}

pub fn map_json_error(e: serde_json::Error, path: &str) -> AppError {
    AppError::internal(
        "Malformed catalog JSON",
        json!({ "path": path, "line": e.line(), "column": e.column(), "reason": e.to_string() }),
    )
}

pub fn map_validation_errors(
    e: validator::ValidationErrors,
    product: &str,
    index: usize,
) -> AppError {
    let mut fields: Vec<String> = e.field_errors().keys().map(|k| k.to_string()).collect();
    fields.sort();
    AppError::bad_request(
        "Invalid release record",
        json!({ "product": product, "release_index": index, "fields": fields }),
    )
}

pub fn map_config_error(e: anyhow::Error) -> AppError {
    AppError::bad_request(
        "Invalid configuration",
        json!({ "reason": format!("{e:#}") }),
    )
}
