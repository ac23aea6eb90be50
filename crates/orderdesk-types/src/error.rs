//! Error types for orderdesk.
//!
//! All errors use the `OD_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Order errors
//! - 3xx: Identifier errors
//! - 4xx: Notification errors
//! - 9xx: General / internal errors
//!
//! Several outcomes are deliberately *not* errors: registering over an
//! existing id, removing an unknown id, and finding no matching order.

use thiserror::Error;

use crate::OrderId;

/// Central error enum for all orderdesk operations.
#[derive(Debug, Error)]
pub enum OrderdeskError {
    // =================================================================
    // Order Errors (1xx)
    // =================================================================
    /// The requested order is not outstanding.
    #[error("OD_ERR_100: Order not found: {0}")]
    OrderNotFound(OrderId),

    /// The order failed caller-side validation.
    #[error("OD_ERR_101: Invalid order: {reason}")]
    InvalidOrder { reason: String },

    // =================================================================
    // Identifier Errors (3xx)
    // =================================================================
    /// The OS entropy source could not produce bytes for a new order id.
    #[error("OD_ERR_300: Entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    // =================================================================
    // Notification Errors (4xx)
    // =================================================================
    /// A notifier failed to deliver a message.
    #[error("OD_ERR_400: Notification failed: {reason}")]
    NotifyFailed { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("OD_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Serialization / deserialization error.
    #[error("OD_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (invalid config document, bad values, etc.).
    #[error("OD_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, OrderdeskError>;

impl From<serde_json::Error> for OrderdeskError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
