//! Fundme: wallet transaction controller for a single fund/withdraw contract.
//!
//! # Architecture
//!
//! ```text
//! TransactionController (entry point)
//!   │
//!   ├── WalletSession ── WalletProvider (window.ethereum / mock)
//!   │     └── eth_requestAccounts, eth_sendTransaction, eth_getBalance
//!   │
//!   ├── OwnerPolicy (case-insensitive owner check)
//!   ├── Amount codec (major units <-> 10^18 hex wire amounts)
//!   │
//!   ├── StatusReporter ── StatusSink (status text, console)
//!   ├── AffordanceBinder (button labels / enabled flags, alert)
//!   └── Scheduler (balance refresh after a submitted transaction)
//! ```
//!
//! # Actions
//!
//! | Action | Method | Provider calls |
//! |--------|--------|----------------|
//! | connect | `controller.connect()` | `eth_requestAccounts` |
//! | fund | `controller.fund(amount)` | `eth_requestAccounts`, `eth_sendTransaction` |
//! | withdraw | `controller.withdraw()` | `eth_requestAccounts`, `eth_sendTransaction` (owner only) |
//! | balance | `controller.query_balance()` | `eth_getBalance` |
//!
//! # Features
//!
//! - `native` - tokio scheduler, tracing subscriber, env configuration
//! - `wasm` - browser binding (`window.ethereum`, DOM buttons, `setTimeout`)
//!
//! # Usage
//!
//! ```ignore
//! use fundme::{ControllerConfig, ControllerContext, TransactionController, TokioScheduler};
//!
//! let controller = TransactionController::new(
//!     ControllerConfig::from_env()?,
//!     provider,
//!     ControllerContext { binder, status, scheduler: Rc::new(TokioScheduler) },
//! );
//! controller.initialize().await;
//! controller.fund("0.5").await?;
//! ```

// =============================================================================
// Shared modules (compile everywhere)
// =============================================================================
pub mod config;
pub mod controller;
pub mod core;
pub mod error;
pub mod session;
pub mod status;

// =============================================================================
// Native-only modules (tokio, tracing-subscriber)
// =============================================================================
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod runtime;

// =============================================================================
// WASM-only modules (browser, wasm-bindgen)
// =============================================================================
#[cfg(feature = "wasm")]
pub mod wasm;

// =============================================================================
// Re-exports: Shared
// =============================================================================
pub use config::ControllerConfig;
pub use controller::{
    Action, ActionState, Affordance, AffordanceBinder, ControllerContext, Outcome, Scheduler,
    TransactionController,
};
pub use core::{format_units, from_wire_balance, to_wire, OwnerPolicy, WireAmount};
pub use error::{ConfigError, RpcError, WalletError, WalletResult};
pub use session::{TransactionRequest, WalletProvider, WalletSession};
pub use status::{LogSink, StatusReporter, StatusSink};

// =============================================================================
// Re-exports: Native
// =============================================================================
#[cfg(feature = "native")]
pub use logging::init_logging;
#[cfg(feature = "native")]
pub use runtime::TokioScheduler;

// =============================================================================
// Re-exports: WASM
// =============================================================================
#[cfg(feature = "wasm")]
pub use wasm::{DomBinder, InjectedProvider, TimeoutScheduler};
