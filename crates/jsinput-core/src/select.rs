//! Choice selector rebuild
//!
//! The selector is always rebuilt from scratch: every option is removed,
//! then one option per choice is appended in order.

use crate::error::BridgeError;
use crate::state::WidgetState;

/// One `<option>` to append
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Position in `availableChoices`, as a string
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// The UI element listing the choices
pub trait ChoiceSelector {
    /// Remove every existing option
    fn clear_options(&mut self) -> Result<(), BridgeError>;

    fn append_option(&mut self, option: &ChoiceOption) -> Result<(), BridgeError>;
}

impl<S: ChoiceSelector + ?Sized> ChoiceSelector for &mut S {
    fn clear_options(&mut self) -> Result<(), BridgeError> {
        (**self).clear_options()
    }

    fn append_option(&mut self, option: &ChoiceOption) -> Result<(), BridgeError> {
        (**self).append_option(option)
    }
}

/// Options for a state, in choice order
pub fn options_for(state: &WidgetState) -> Vec<ChoiceOption> {
    state
        .available_choices
        .iter()
        .enumerate()
        .map(|(index, choice)| ChoiceOption {
            value: index.to_string(),
            label: choice.clone(),
            selected: *choice == state.selected_choice,
        })
        .collect()
}

/// Replace the selector's options with the state's choices
pub fn rebuild<S: ChoiceSelector + ?Sized>(
    selector: &mut S,
    state: &WidgetState,
) -> Result<(), BridgeError> {
    selector.clear_options()?;
    for option in options_for(state) {
        selector.append_option(&option)?;
    }
    Ok(())
}
