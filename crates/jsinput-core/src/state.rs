//! Widget state exchanged with the hosting problem page

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

/// Choices offered by the widget and the learner's current pick
///
/// Serialized with the camelCase keys the grader stores:
/// `{"availableChoices": [...], "selectedChoice": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetState {
    pub available_choices: Vec<String>,
    pub selected_choice: String,
}

impl WidgetState {
    pub fn new<I, S>(choices: I, selected: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available_choices: choices.into_iter().map(Into::into).collect(),
            selected_choice: selected.into(),
        }
    }

    /// Parse a state payload; missing keys default to empty
    pub fn from_json(json: &str) -> Result<Self, BridgeError> {
        serde_json::from_str(json).map_err(BridgeError::Parse)
    }

    pub fn to_json(&self) -> Result<String, BridgeError> {
        serde_json::to_string(self).map_err(BridgeError::Serialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_payload() {
        let state =
            WidgetState::from_json(r#"{"availableChoices":["A","B"],"selectedChoice":"B"}"#).unwrap();
        assert_eq!(state, WidgetState::new(["A", "B"], "B"));
    }

    #[test]
    fn test_missing_keys_default() {
        let state = WidgetState::from_json("{}").unwrap();
        assert_eq!(state, WidgetState::default());

        let state = WidgetState::from_json(r#"{"availableChoices":["x"]}"#).unwrap();
        assert_eq!(state.selected_choice, "");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let state =
            WidgetState::from_json(r#"{"selectedChoice":"A","attempts":3}"#).unwrap();
        assert_eq!(state.selected_choice, "A");
    }

    #[test]
    fn test_rejects_non_object_and_garbage() {
        assert!(matches!(
            WidgetState::from_json("not json"),
            Err(BridgeError::Parse(_))
        ));
        assert!(WidgetState::from_json(r#""just a string""#).is_err());
        assert!(WidgetState::from_json(r#"{"availableChoices":"A"}"#).is_err());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = WidgetState::new(["A", "B"], "A").to_json().unwrap();
        assert_eq!(json, r#"{"availableChoices":["A","B"],"selectedChoice":"A"}"#);
    }
}
