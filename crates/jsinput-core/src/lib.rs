//! State bridge for embeddable grading widgets
//!
//! A widget embedded in a problem page keeps a list of choices and the
//! learner's selection. The parent page pulls the grade and state and
//! pushes saved state back through three procedures on a cross-origin
//! channel. This crate holds that logic independent of the DOM and the
//! channel library.
//!
//! ```
//! use jsinput_core::{BridgeError, ChoiceOption, ChoiceSelector, GradingBridge};
//!
//! struct Labels(Vec<String>);
//!
//! impl ChoiceSelector for Labels {
//!     fn clear_options(&mut self) -> Result<(), BridgeError> {
//!         self.0.clear();
//!         Ok(())
//!     }
//!
//!     fn append_option(&mut self, option: &ChoiceOption) -> Result<(), BridgeError> {
//!         self.0.push(option.label.clone());
//!         Ok(())
//!     }
//! }
//!
//! let mut bridge = GradingBridge::new(Labels(Vec::new()));
//! bridge.set_state(r#"{"availableChoices":["A","B"],"selectedChoice":"B"}"#)?;
//! assert_eq!(bridge.get_grade(), "\"B\"");
//! assert_eq!(bridge.selector().0, vec!["A", "B"]);
//! # Ok::<(), BridgeError>(())
//! ```

pub mod bridge;
pub mod config;
pub mod error;
pub mod select;
pub mod state;

pub use bridge::{exposed_methods, GradingBridge, RpcMethod};
pub use config::BridgeConfig;
pub use error::BridgeError;
pub use select::{options_for, rebuild, ChoiceOption, ChoiceSelector};
pub use state::WidgetState;
