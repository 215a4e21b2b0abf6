//! Transaction controller: the four user actions as small state machines.
//!
//! ```text
//!            ┌──────────────┐   provider call   ┌────────────┐
//!  Idle ───▶ │AwaitingWallet│ ────────────────▶ │ Submitting │
//!   ▲        └──────┬───────┘                   └─────┬──────┘
//!   │               │ error                           │
//!   │               ▼                                 ▼
//!   └──────── Failed / Succeeded ◀────────────────────┘
//! ```
//!
//! Every operation catches its own errors: the error is reported to the status
//! channel, the affordance is restored, the action re-enters `Idle`, and the
//! error is returned only so callers (and tests) can inspect it.
//!
//! There is no internal mutex. Re-entry of an action is prevented by disabling
//! its affordance on entry, which is sufficient under single-threaded
//! cooperative scheduling.

mod affordance;
mod scheduler;
mod state;

pub use affordance::{Affordance, AffordanceBinder};
pub use scheduler::Scheduler;
pub use state::{Action, ActionState, ActionStates};

use std::rc::Rc;

use affordance::AffordanceMirror;

use crate::config::ControllerConfig;
use crate::core::constants::label;
use crate::core::{format_units, from_wire_balance, to_wire, OwnerPolicy};
use crate::error::{WalletError, WalletResult};
use crate::session::{TransactionRequest, WalletProvider, WalletSession};
use crate::status::{StatusReporter, StatusSink};

/// Handles to the outside world, passed in at construction.
#[derive(Clone)]
pub struct ControllerContext {
    pub binder: Rc<dyn AffordanceBinder>,
    pub status: Rc<dyn StatusSink>,
    pub scheduler: Rc<dyn Scheduler>,
}

/// Successful result of an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Connected { account: String, is_owner: bool },
    Submitted { tx_hash: String },
    Balance(f64),
}

#[derive(Clone)]
pub struct TransactionController {
    inner: Rc<Inner>,
}

struct Inner {
    config: ControllerConfig,
    policy: OwnerPolicy,
    session: WalletSession,
    status: StatusReporter,
    binder: Rc<dyn AffordanceBinder>,
    scheduler: Rc<dyn Scheduler>,
    states: ActionStates,
    affordances: AffordanceMirror,
}

impl TransactionController {
    pub fn new(config: ControllerConfig, provider: Rc<dyn WalletProvider>, context: ControllerContext) -> Self {
        let policy = OwnerPolicy::new(&config.owner_address);
        Self {
            inner: Rc::new(Inner {
                config,
                policy,
                session: WalletSession::new(provider),
                status: StatusReporter::new(context.status),
                binder: context.binder,
                scheduler: context.scheduler,
                states: ActionStates::default(),
                affordances: AffordanceMirror::new(),
            }),
        }
    }

    pub fn config(&self) -> &ControllerConfig { &self.inner.config }
    pub fn session(&self) -> &WalletSession { &self.inner.session }
    pub fn status(&self) -> &StatusReporter { &self.inner.status }
    pub fn state(&self, action: Action) -> ActionState { self.inner.states.get(action) }
    pub fn affordance(&self, action: Action) -> Affordance { self.inner.affordances.get(action) }

    /// Page-ready entry: publish resting affordances, then auto-connect if
    /// the wallet already exposes a selected account.
    pub async fn initialize(&self) {
        for action in Action::ALL {
            self.show(action, Affordance::default_for(action));
        }
        self.report("Ready to connect. Please click 'Connect' to start.");
        if let Some(selected) = self.inner.session.current_selected_address() {
            tracing::info!(%selected, "wallet already connected, reconnecting");
            let _ = self.connect().await;
        }
    }

    pub async fn connect(&self) -> WalletResult<Outcome> {
        let action = Action::Connect;
        if !self.inner.session.is_provider_available() {
            self.show(action, Affordance::new(self.install_prompt(), true));
            self.report(format!("{} not installed!", self.inner.config.wallet_name));
            self.inner.states.transition(action, ActionState::Failed);
            self.inner.states.transition(action, ActionState::Idle);
            return Err(WalletError::NoProvider);
        }

        self.begin(action, ActionState::AwaitingWallet, label::CONNECTING);
        self.report("Connecting to wallet...");

        let result = self.inner.session.active_account().await.map(|account| {
            let is_owner = self.inner.policy.is_authorized(Some(&account));
            (account, is_owner)
        });
        let rest = match &result {
            Ok((account, is_owner)) => {
                self.report(format!("Connected with account: {account}"));
                self.set_withdraw_enabled(*is_owner);
                if *is_owner {
                    self.report("You are the owner. Withdraw button enabled.");
                } else {
                    self.report("You are not the owner. Withdraw button disabled.");
                }
                label::CONNECTED
            }
            Err(e) => {
                self.report(format!("Connection failed: {e}"));
                label::CONNECT_FAILED
            }
        };
        self.finish(action, &result, Affordance::new(rest, true));
        result.map(|(account, is_owner)| Outcome::Connected { account, is_owner })
    }

    pub async fn fund(&self, amount_input: &str) -> WalletResult<Outcome> {
        let action = Action::Fund;
        let unit = &self.inner.config.unit;
        let value = match to_wire(amount_input) {
            Ok(value) => value,
            Err(e) => {
                self.report(format!("Please enter a valid {unit} amount"));
                return Err(e);
            }
        };
        if !self.inner.session.is_provider_available() {
            self.report(self.install_prompt());
            return Err(WalletError::NoProvider);
        }

        self.report(format!("Funding with {} {unit}...", amount_input.trim()));
        self.begin(action, ActionState::AwaitingWallet, label::PROCESSING);

        let contract = self.inner.config.contract_address.clone();
        let result = self
            .submit(action, move |from| Ok(TransactionRequest::fund(&contract, from, value)))
            .await;
        match &result {
            Ok(tx_hash) => {
                self.report(format!("Transaction submitted! Hash: {tx_hash}"));
                self.schedule_refresh();
            }
            Err(e) => self.report(format!("Funding failed: {e}")),
        }
        self.finish(action, &result, Affordance::default_for(action));
        result.map(|tx_hash| Outcome::Submitted { tx_hash })
    }

    /// Owner-only. Authorization is re-derived from the account the wallet
    /// returns now, never from an earlier `connect`.
    pub async fn withdraw(&self) -> WalletResult<Outcome> {
        let action = Action::Withdraw;
        if !self.inner.session.is_provider_available() {
            self.report(self.install_prompt());
            return Err(WalletError::NoProvider);
        }

        self.report("Attempting to withdraw funds...");
        self.begin(action, ActionState::AwaitingWallet, label::PROCESSING);

        let contract = self.inner.config.contract_address.clone();
        let policy = self.inner.policy.clone();
        let result = self
            .submit(action, move |from| {
                if !policy.is_authorized(Some(from)) {
                    return Err(WalletError::NotAuthorized(from.to_string()));
                }
                Ok(TransactionRequest::withdraw(&contract, from))
            })
            .await;
        match &result {
            Ok(tx_hash) => {
                self.report(format!("Withdrawal transaction submitted! Hash: {tx_hash}"));
                self.schedule_refresh();
            }
            Err(WalletError::NotAuthorized(_)) => self.report("Only the contract owner can withdraw funds!"),
            Err(e) => self.report(format!("Withdrawal failed: {e}")),
        }
        // Account changes seen while in flight were deferred; settle on the
        // identity as it stands now.
        let enabled = self.inner.policy.is_authorized(self.inner.session.identity().as_deref());
        self.finish(action, &result, Affordance::new(label::WITHDRAW, enabled));
        result.map(|tx_hash| Outcome::Submitted { tx_hash })
    }

    pub async fn query_balance(&self) -> WalletResult<Outcome> {
        let action = Action::Balance;
        if !self.inner.session.is_provider_available() {
            self.report(self.install_prompt());
            return Err(WalletError::NoProvider);
        }

        self.begin(action, ActionState::Submitting, label::LOADING);

        let result = match self.inner.session.balance_of(&self.inner.config.contract_address).await {
            Ok(hex_wei) => from_wire_balance(&hex_wei),
            Err(e) => Err(e),
        };
        match &result {
            Ok(balance) => {
                let shown = format!("{} {}", format_units(*balance), self.inner.config.unit);
                self.report(format!("Contract balance: {shown}"));
                self.inner.binder.alert(&format!("Current contract balance: {shown}"));
            }
            Err(e) => self.report(format!("Failed to get balance: {e}")),
        }
        self.finish(action, &result, Affordance::default_for(action));
        result.map(Outcome::Balance)
    }

    /// Reaction to the provider's `accountsChanged` event.
    pub fn handle_accounts_changed(&self, accounts: &[String]) {
        let account = accounts.first().cloned();
        let is_owner = self.inner.policy.is_authorized(account.as_deref());
        self.inner.session.set_identity(account.clone());
        self.set_withdraw_enabled(is_owner);
        match account {
            Some(account) => self.report(format!("Active account changed: {account}")),
            None => self.report("Wallet disconnected"),
        }
    }

    // =========================================================================
    // Transition helpers
    // =========================================================================

    /// Request accounts, build the transaction, send it.
    async fn submit<F>(&self, action: Action, build: F) -> WalletResult<String>
    where
        F: FnOnce(&str) -> WalletResult<TransactionRequest>,
    {
        let from = self.inner.session.active_account().await?;
        let tx = build(&from)?;
        self.inner.states.transition(action, ActionState::Submitting);
        self.inner.session.send_transaction(&tx).await
    }

    /// Enter a busy state with the affordance disabled.
    fn begin(&self, action: Action, state: ActionState, busy_label: &str) {
        self.inner.states.transition(action, state);
        self.show(action, Affordance::new(busy_label, false));
    }

    /// Terminal state, restore the affordance, back to idle.
    fn finish<T>(&self, action: Action, result: &WalletResult<T>, rest: Affordance) {
        match result {
            Ok(_) => self.inner.states.transition(action, ActionState::Succeeded),
            Err(e) => {
                tracing::warn!(action = action.as_str(), error = %e, "action failed");
                self.inner.states.transition(action, ActionState::Failed);
            }
        }
        self.show(action, rest);
        self.inner.states.transition(action, ActionState::Idle);
    }

    fn set_withdraw_enabled(&self, enabled: bool) {
        // An in-flight withdraw owns its affordance; it re-derives the flag
        // from the session identity when it finishes.
        if self.state(Action::Withdraw) != ActionState::Idle {
            return;
        }
        let current = self.affordance(Action::Withdraw);
        self.show(Action::Withdraw, current.enabled_as(enabled));
    }

    fn schedule_refresh(&self) {
        let this = self.clone();
        let delay = self.inner.config.refresh_delay();
        tracing::debug!(?delay, "scheduling balance refresh");
        self.inner.scheduler.schedule(
            delay,
            Box::pin(async move {
                let _ = this.query_balance().await;
            }),
        );
    }

    fn show(&self, action: Action, affordance: Affordance) {
        self.inner.affordances.set(self.inner.binder.as_ref(), action, affordance);
    }

    fn report(&self, message: impl Into<String>) {
        self.inner.status.report(message);
    }

    fn install_prompt(&self) -> String {
        format!("Please install {}!", self.inner.config.wallet_name)
    }
}
