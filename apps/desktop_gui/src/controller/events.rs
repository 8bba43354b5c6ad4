//! Events raised by the triangle widgets and the warning timer.

use triangle_core::Attribute;

/// The two redundant affordances for changing the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Checkbox,
    Vertex,
}

impl InputSource {
    pub fn label(self) -> &'static str {
        match self {
            InputSource::Checkbox => "checkbox",
            InputSource::Vertex => "vertex",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Toggle {
        attribute: Attribute,
        source: InputSource,
    },
    /// Fired once per limit warning after the configured delay.
    WarningExpired,
}
