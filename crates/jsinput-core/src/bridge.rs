//! Grading bridge
//!
//! Backs the three procedures a hosting problem page calls on an embedded
//! widget: `getGrade`, `getState` and `setState`. The bridge owns the
//! widget state and the choice selector; channel bindings are thin
//! adapters over [`GradingBridge::dispatch`].

use std::fmt;

use tracing::{debug, warn};

use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::select::{rebuild, ChoiceSelector};
use crate::state::WidgetState;

/// Procedures exposed to the parent page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcMethod {
    GetGrade,
    GetState,
    SetState,
}

impl RpcMethod {
    pub const ALL: [RpcMethod; 3] = [RpcMethod::GetGrade, RpcMethod::GetState, RpcMethod::SetState];

    /// Name the method is bound under
    pub fn name(self) -> &'static str {
        match self {
            RpcMethod::GetGrade => "getGrade",
            RpcMethod::GetState => "getState",
            RpcMethod::SetState => "setState",
        }
    }
}

impl fmt::Display for RpcMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Methods to bind on the channel: all of them when framed, none otherwise
pub fn exposed_methods(config: &BridgeConfig) -> &'static [RpcMethod] {
    if config.framed {
        &RpcMethod::ALL
    } else {
        &[]
    }
}

/// Widget state plus the selector that displays it
pub struct GradingBridge<S> {
    state: WidgetState,
    selector: S,
}

impl<S: ChoiceSelector> GradingBridge<S> {
    pub fn new(selector: S) -> Self {
        Self {
            state: WidgetState::default(),
            selector,
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// JSON-encoded selected choice; the grader may use it directly
    pub fn get_grade(&self) -> String {
        serde_json::Value::from(self.state.selected_choice.as_str()).to_string()
    }

    /// JSON-encoded full state
    pub fn get_state(&self) -> Result<String, BridgeError> {
        self.state.to_json()
    }

    /// Replace the whole state from a JSON payload and rebuild the selector
    ///
    /// A payload that does not parse leaves the current state untouched.
    pub fn set_state(&mut self, payload: &str) -> Result<(), BridgeError> {
        let state = WidgetState::from_json(payload).map_err(|e| {
            warn!(error = %e, "rejected setState payload");
            e
        })?;

        debug!(
            choices = state.available_choices.len(),
            selected = %state.selected_choice,
            "state replaced"
        );
        self.state = state;
        rebuild(&mut self.selector, &self.state)
    }

    /// Channel entry point for `setState`: the channel passes its
    /// transaction handle first, which the bridge has no use for
    pub fn set_state_from_transport<T>(
        &mut self,
        _transaction: T,
        payload: &str,
    ) -> Result<(), BridgeError> {
        self.set_state(payload)
    }

    /// The learner picked a different option in the selector
    pub fn select_choice(&mut self, label: &str) {
        self.state.selected_choice = label.to_string();
    }

    /// Route a channel call by method name
    ///
    /// Returns the method's string result, or `None` for `setState`.
    pub fn dispatch(
        &mut self,
        method: RpcMethod,
        payload: Option<&str>,
    ) -> Result<Option<String>, BridgeError> {
        match method {
            RpcMethod::GetGrade => Ok(Some(self.get_grade())),
            RpcMethod::GetState => self.get_state().map(Some),
            RpcMethod::SetState => {
                let payload = payload.ok_or(BridgeError::MissingPayload)?;
                self.set_state(payload).map(|()| None)
            }
        }
    }
}
