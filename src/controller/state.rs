//! Per-action state machines.

use std::cell::Cell;
use std::fmt;

/// The user-triggerable actions, each with its own affordance and state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Connect,
    Fund,
    Withdraw,
    Balance,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Connect, Action::Fund, Action::Withdraw, Action::Balance];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Connect => "connect",
            Action::Fund => "fund",
            Action::Withdraw => "withdraw",
            Action::Balance => "balance",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Idle` is both the initial state and the re-entry state after every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionState {
    #[default]
    Idle,
    AwaitingWallet,
    Submitting,
    Succeeded,
    Failed,
}

/// One state cell per action.
#[derive(Debug, Default)]
pub struct ActionStates {
    cells: [Cell<ActionState>; 4],
}

impl ActionStates {
    pub fn get(&self, action: Action) -> ActionState {
        self.cells[action.index()].get()
    }

    pub fn transition(&self, action: Action, next: ActionState) {
        let prev = self.cells[action.index()].replace(next);
        tracing::debug!(action = action.as_str(), ?prev, ?next, "transition");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_start_idle_and_are_independent() {
        let states = ActionStates::default();
        for action in Action::ALL {
            assert_eq!(states.get(action), ActionState::Idle);
        }
        states.transition(Action::Fund, ActionState::Submitting);
        assert_eq!(states.get(Action::Fund), ActionState::Submitting);
        assert_eq!(states.get(Action::Withdraw), ActionState::Idle);
    }
}
