//! Affordance contract: what the controller tells the UI on each transition.

use std::cell::RefCell;

use super::state::Action;
use crate::core::constants::label;

/// Label and enabled flag of one triggering control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordance {
    pub label: String,
    pub enabled: bool,
}

impl Affordance {
    pub fn new(label: impl Into<String>, enabled: bool) -> Self {
        Self { label: label.into(), enabled }
    }

    pub fn enabled_as(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Resting affordance for `action`. Withdraw starts disabled until an
    /// owner connects.
    pub fn default_for(action: Action) -> Self {
        match action {
            Action::Connect => Self::new(label::CONNECT, true),
            Action::Fund => Self::new(label::FUND, true),
            Action::Withdraw => Self::new(label::WITHDRAW, false),
            Action::Balance => Self::new(label::BALANCE, true),
        }
    }
}

/// UI side of the contract (DOM buttons in the browser, recorders in tests).
pub trait AffordanceBinder {
    fn render(&self, action: Action, affordance: &Affordance);
    /// Blocking user-visible notification; only used for balance results.
    fn alert(&self, message: &str);
}

/// Controller-owned mirror of every affordance. The binder only ever sees
/// what passes through here.
pub(crate) struct AffordanceMirror {
    current: RefCell<[Affordance; 4]>,
}

impl AffordanceMirror {
    pub(crate) fn new() -> Self {
        Self { current: RefCell::new(Action::ALL.map(Affordance::default_for)) }
    }

    pub(crate) fn get(&self, action: Action) -> Affordance {
        self.current.borrow()[action.index()].clone()
    }

    pub(crate) fn set(&self, binder: &dyn AffordanceBinder, action: Action, affordance: Affordance) {
        binder.render(action, &affordance);
        self.current.borrow_mut()[action.index()] = affordance;
    }
}
