//! Wallet session: handshake with the injected provider and the current identity.
//!
//! # Provider calls
//!
//! | Method | Params | Result |
//! |--------|--------|--------|
//! | `eth_requestAccounts` | none | `[address, ...]` |
//! | `eth_sendTransaction` | `[{to, from, value?, data?}]` | tx hash |
//! | `eth_getBalance` | `[address, "latest"]` | hex wei |

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};

use crate::core::constants::{rpc, selector};
use crate::core::WireAmount;
use crate::error::{RpcError, WalletError, WalletResult};

/// EIP-1193 shaped provider. Calls suspend until the wallet (and possibly the
/// user) answers; there is no cancellation.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Provider is present in the runtime environment
    fn is_available(&self) -> bool;
    /// Already-selected account, without prompting
    fn selected_address(&self) -> Option<String>;
    async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError>;
}

/// Parameters of `eth_sendTransaction`. Built fresh per action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRequest {
    pub to: String,
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<WireAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl TransactionRequest {
    pub fn fund(contract: &str, from: &str, value: WireAmount) -> Self {
        Self { to: contract.into(), from: from.into(), value: Some(value), data: Some(selector::FUND.into()) }
    }

    pub fn withdraw(contract: &str, from: &str) -> Self {
        Self { to: contract.into(), from: from.into(), value: None, data: Some(selector::WITHDRAW.into()) }
    }
}

#[derive(Clone)]
pub struct WalletSession {
    provider: Rc<dyn WalletProvider>,
    identity: Rc<RefCell<Option<String>>>,
}

impl WalletSession {
    pub fn new(provider: Rc<dyn WalletProvider>) -> Self {
        Self { provider, identity: Rc::new(RefCell::new(None)) }
    }

    pub fn is_provider_available(&self) -> bool {
        self.provider.is_available()
    }

    /// Best-effort read of the provider's selected account; no prompt.
    pub fn current_selected_address(&self) -> Option<String> {
        if !self.provider.is_available() {
            return None;
        }
        self.provider.selected_address().filter(|a| !a.is_empty())
    }

    /// Ask the wallet for accounts, recording the first as the identity.
    pub async fn request_accounts(&self) -> WalletResult<Vec<String>> {
        if !self.provider.is_available() {
            return Err(WalletError::NoProvider);
        }
        let response = self
            .provider
            .request(rpc::REQUEST_ACCOUNTS, Vec::new())
            .await
            .map_err(|e| WalletError::ProviderRejected(e.message))?;
        let accounts: Vec<String> = serde_json::from_value(response)
            .map_err(|e| WalletError::ProviderCallFailed(format!("unexpected accounts response: {e}")))?;
        let first = accounts.first().ok_or(WalletError::NoAccountsReturned)?;
        self.set_identity(Some(first.clone()));
        Ok(accounts)
    }

    /// First account from a fresh `request_accounts` call.
    pub async fn active_account(&self) -> WalletResult<String> {
        let mut accounts = self.request_accounts().await?;
        Ok(accounts.swap_remove(0))
    }

    pub async fn send_transaction(&self, tx: &TransactionRequest) -> WalletResult<String> {
        let params = serde_json::to_value(tx).map_err(|e| WalletError::ProviderCallFailed(e.to_string()))?;
        let hash = self.call(rpc::SEND_TRANSACTION, vec![params]).await?;
        into_string(hash, "transaction hash")
    }

    /// Balance of `address` at the latest block, as hex wei.
    pub async fn balance_of(&self, address: &str) -> WalletResult<String> {
        let balance = self.call(rpc::GET_BALANCE, vec![json!(address), json!(rpc::LATEST_BLOCK)]).await?;
        into_string(balance, "balance")
    }

    async fn call(&self, method: &str, params: Vec<Value>) -> WalletResult<Value> {
        if !self.provider.is_available() {
            return Err(WalletError::NoProvider);
        }
        tracing::debug!(method, "provider request");
        Ok(self.provider.request(method, params).await?)
    }

    pub fn identity(&self) -> Option<String> {
        self.identity.borrow().clone()
    }

    pub fn set_identity(&self, account: Option<String>) {
        *self.identity.borrow_mut() = account;
    }
}

fn into_string(value: Value, what: &str) -> WalletResult<String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(WalletError::ProviderCallFailed(format!("unexpected {what}: {other}"))),
    }
}
