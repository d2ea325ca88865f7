//! # Sales Errors
//!
//! Errors raised by the backend client and by sale submission, plus the
//! `Notice` the view shows for them.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow on the Sales Screen                       │
//! │                                                                         │
//! │  (a) CoreError (validation)      ─┐                                     │
//! │      before any backend call      │                                     │
//! │                                   ├──► SubmitError ──► Notice::Error    │
//! │  (b) create-sale success=false   ─┤        form state preserved         │
//! │      Rejected { reason }          │                                     │
//! │                                   │                                     │
//! │  (c) BackendError (transport)    ─┘                                     │
//! │                                                                         │
//! │  Load failures (get-sales, get-products) are logged only.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use inventory_core::{CoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Backend Error
// =============================================================================

/// Failures talking to the backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BackendError {
    /// The command channel itself failed (host bridge down, handler threw).
    #[error("Command {command} failed: {message}")]
    Transport { command: String, message: String },

    /// The response did not match the expected shape.
    #[error("Could not decode {command} response: {message}")]
    Decode { command: String, message: String },

    /// The request could not be serialized.
    #[error("Could not encode {command} request: {message}")]
    Encode { command: String, message: String },
}

impl BackendError {
    pub fn transport(command: &str, message: impl Into<String>) -> Self {
        BackendError::Transport {
            command: command.to_string(),
            message: message.into(),
        }
    }
}

/// Convenience type alias for backend calls.
pub type BackendResult<T> = Result<T, BackendError>;

// =============================================================================
// Submit Error
// =============================================================================

/// Why a sale was not completed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// A precondition failed; the backend was never contacted.
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// The backend answered `success: false`.
    #[error("Sale rejected: {reason}")]
    Rejected { reason: String },

    /// The backend could not be reached or answered garbage.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl SubmitError {
    /// The alert text shown to the user.
    ///
    /// ## Messages
    /// - Missing field or bad quantity: "Please fill all required fields"
    /// - Over stock or over the quantity limit: "Quantity exceeds available stock"
    /// - Rejected: "Error completing sale: <reason>"
    /// - Transport: "Error completing sale"
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Validation(CoreError::InsufficientStock { .. })
            | SubmitError::Validation(CoreError::Validation(ValidationError::OutOfRange {
                ..
            })) => "Quantity exceeds available stock".to_string(),
            SubmitError::Validation(CoreError::Validation(_)) => {
                "Please fill all required fields".to_string()
            }
            SubmitError::Rejected { reason } => format!("Error completing sale: {}", reason),
            SubmitError::Backend(_) => "Error completing sale".to_string(),
        }
    }
}

// =============================================================================
// Notice
// =============================================================================

/// A blocking alert for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "camelCase")]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Info(message) | Notice::Error(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

impl From<&SubmitError> for Notice {
    fn from(err: &SubmitError) -> Self {
        Notice::Error(err.user_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let missing: SubmitError = CoreError::from(ValidationError::Required {
            field: "product".to_string(),
        })
        .into();
        assert_eq!(missing.user_message(), "Please fill all required fields");

        let stock: SubmitError = CoreError::InsufficientStock {
            product: "Sugar".to_string(),
            available: 3,
            requested: 5,
        }
        .into();
        assert_eq!(stock.user_message(), "Quantity exceeds available stock");

        let too_many: SubmitError = CoreError::from(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: 99_999,
        })
        .into();
        assert_eq!(too_many.user_message(), "Quantity exceeds available stock");

        let rejected = SubmitError::Rejected {
            reason: "Stock changed".to_string(),
        };
        assert_eq!(rejected.user_message(), "Error completing sale: Stock changed");

        let transport: SubmitError = BackendError::transport("create-sale", "bridge closed").into();
        assert_eq!(transport.user_message(), "Error completing sale");
    }

    #[test]
    fn test_notice_from_submit_error() {
        let notice = Notice::from(&SubmitError::Rejected {
            reason: "x".to_string(),
        });
        assert!(notice.is_error());
        assert_eq!(notice.message(), "Error completing sale: x");
    }
}
