//! Selection state and trade-off content for the project triangle.
//!
//! [`SelectionController`] owns the selected [`Attribute`]s and derives a
//! renderer-agnostic [`ViewState`]; drawing it is left to the caller.

pub mod domain;
pub mod error;
pub mod scenario;
pub mod selection;
pub mod view;

pub use domain::{AccentColor, Attribute, ScenarioKey};
pub use error::SelectionError;
pub use scenario::{Example, Scenario, ScenarioTable};
pub use selection::{SelectionController, SelectionSet, Toggled, MAX_SELECTIONS};
pub use view::{CenterBadge, Notice, Stage, ViewState, LIMIT_WARNING};
