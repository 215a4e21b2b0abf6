//! Error kinds surfaced by the wallet controller.
//!
//! Every variant is recoverable: the controller converts it into a status
//! message at the action boundary and returns the action to idle.

use thiserror::Error;

/// Result alias for controller and session operations
pub type WalletResult<T> = Result<T, WalletError>;

/// EIP-1193 code for "user rejected the request"
pub const USER_REJECTED: i64 = 4001;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WalletError {
    /// No injected wallet provider in the runtime environment
    #[error("wallet provider not installed")]
    NoProvider,
    /// User declined, or the provider refused the request
    #[error("{0}")]
    ProviderRejected(String),
    #[error("No accounts returned from wallet")]
    NoAccountsReturned,
    /// Local validation failure; no external call was made
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),
    /// Active account is not the configured owner
    #[error("account {0} is not the contract owner")]
    NotAuthorized(String),
    /// Transport / RPC failure from send or balance calls
    #[error("{0}")]
    ProviderCallFailed(String),
}

/// Raw failure from `provider.request`, shaped like an EIP-1193 error object.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct RpcError {
    pub code: Option<i64>,
    pub message: String,
}

impl RpcError {
    pub fn new(code: Option<i64>, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(Some(USER_REJECTED), message)
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code == Some(USER_REJECTED)
    }
}

impl From<RpcError> for WalletError {
    fn from(e: RpcError) -> Self {
        if e.is_user_rejection() {
            WalletError::ProviderRejected(e.message)
        } else {
            WalletError::ProviderCallFailed(e.message)
        }
    }
}

/// Configuration errors, raised before the controller is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("missing {0}")]
    Missing(&'static str),
    #[error("{field} is not a 20-byte hex address: {value}")]
    InvalidAddress { field: &'static str, value: String },
    #[error("{field} is not a number: {value}")]
    InvalidNumber { field: &'static str, value: String },
}
