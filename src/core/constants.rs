//! Wire and UI constants
//!
//! Centralized registry for provider methods, contract selectors, DOM ids and
//! affordance labels.

/// Provider JSON-RPC methods
pub mod rpc {
    pub const REQUEST_ACCOUNTS: &str = "eth_requestAccounts";
    pub const SEND_TRANSACTION: &str = "eth_sendTransaction";
    pub const GET_BALANCE: &str = "eth_getBalance";

    pub const LATEST_BLOCK: &str = "latest";
    pub const ACCOUNTS_CHANGED: &str = "accountsChanged";
}

/// 4-byte contract method selectors
pub mod selector {
    /// `fund()`
    pub const FUND: &str = "0xb60d4288";
    /// `withdraw()`
    pub const WITHDRAW: &str = "0x3ccfd60b";
}

/// Fixed-point scale between major units and wire amounts (10^18)
pub const WEI_PER_UNIT: f64 = 1e18;

/// Delay before re-querying the balance after a submitted transaction
pub const REFRESH_DELAY_MS: u64 = 2000;

/// Affordance labels
pub mod label {
    pub const CONNECT: &str = "Connect";
    pub const CONNECTING: &str = "Connecting...";
    pub const CONNECTED: &str = "Connected!";
    pub const CONNECT_FAILED: &str = "Connection Failed";

    pub const FUND: &str = "Buy Coffee";
    pub const WITHDRAW: &str = "Withdraw";
    pub const BALANCE: &str = "Get Balance";

    pub const PROCESSING: &str = "Processing...";
    pub const LOADING: &str = "Loading...";
}

/// DOM element ids
pub mod dom {
    pub const CONNECT_BUTTON: &str = "connectButton";
    pub const FUND_BUTTON: &str = "fundButton";
    pub const BALANCE_BUTTON: &str = "balanceButton";
    pub const WITHDRAW_BUTTON: &str = "withdrawButton";
    pub const AMOUNT_INPUT: &str = "ethAmount";
    pub const STATUS: &str = "status";
}
