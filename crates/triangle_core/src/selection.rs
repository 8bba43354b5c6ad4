use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    domain::{Attribute, ScenarioKey},
    error::SelectionError,
    view::ViewState,
};

/// You can only optimize for two attributes at once.
pub const MAX_SELECTIONS: usize = 2;

/// Set of selected attributes.
///
/// Any combination can be built with `collect()`, including all three; only
/// [`SelectionController`] enforces [`MAX_SELECTIONS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Attribute>", from = "Vec<Attribute>")]
pub struct SelectionSet(u8);

impl SelectionSet {
    pub const fn new() -> Self {
        Self(0)
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn contains(&self, attribute: Attribute) -> bool {
        self.0 & attribute.bit() != 0
    }

    /// Members in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Attribute> + '_ {
        Attribute::ALL
            .into_iter()
            .filter(move |attribute| self.contains(*attribute))
    }

    /// The scenario key when exactly two attributes are selected.
    pub fn pair(&self) -> Option<ScenarioKey> {
        let mut members = self.iter();
        match (members.next(), members.next(), members.next()) {
            (Some(a), Some(b), None) => ScenarioKey::from_pair(a, b),
            _ => None,
        }
    }

    fn insert(&mut self, attribute: Attribute) {
        self.0 |= attribute.bit();
    }

    fn remove(&mut self, attribute: Attribute) {
        self.0 &= !attribute.bit();
    }
}

impl FromIterator<Attribute> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut set = SelectionSet::new();
        for attribute in iter {
            set.insert(attribute);
        }
        set
    }
}

impl From<Vec<Attribute>> for SelectionSet {
    fn from(value: Vec<Attribute>) -> Self {
        value.into_iter().collect()
    }
}

impl From<SelectionSet> for Vec<Attribute> {
    fn from(value: SelectionSet) -> Self {
        value.iter().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Selected,
    Deselected,
}

/// Owns the session's selection. Starts empty and is never persisted.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selection: SelectionSet,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `attribute` if selected, otherwise adds it if there is room.
    ///
    /// At the cap the selection is left untouched and
    /// [`SelectionError::SelectionLimitExceeded`] is returned.
    pub fn toggle(&mut self, attribute: Attribute) -> Result<Toggled, SelectionError> {
        if self.selection.contains(attribute) {
            self.selection.remove(attribute);
            debug!(%attribute, size = self.selection.len(), "attribute deselected");
            return Ok(Toggled::Deselected);
        }
        self.try_insert(attribute)?;
        Ok(Toggled::Selected)
    }

    /// Ensures `attribute` is selected. Returns whether anything changed.
    pub fn select(&mut self, attribute: Attribute) -> Result<bool, SelectionError> {
        if self.selection.contains(attribute) {
            return Ok(false);
        }
        self.try_insert(attribute)?;
        Ok(true)
    }

    /// Ensures `attribute` is not selected. Returns whether anything changed.
    pub fn deselect(&mut self, attribute: Attribute) -> bool {
        if !self.selection.contains(attribute) {
            return false;
        }
        self.selection.remove(attribute);
        debug!(%attribute, size = self.selection.len(), "attribute deselected");
        true
    }

    pub fn toggle_named(&mut self, name: &str) -> Result<Toggled, SelectionError> {
        let attribute = name.parse::<Attribute>()?;
        self.toggle(attribute)
    }

    pub fn select_named(&mut self, name: &str) -> Result<bool, SelectionError> {
        let attribute = name.parse::<Attribute>()?;
        self.select(attribute)
    }

    pub fn deselect_named(&mut self, name: &str) -> Result<bool, SelectionError> {
        let attribute = name.parse::<Attribute>()?;
        Ok(self.deselect(attribute))
    }

    pub fn is_selected(&self, attribute: Attribute) -> bool {
        self.selection.contains(attribute)
    }

    pub fn current_selection(&self) -> SelectionSet {
        self.selection
    }

    pub fn derive_view_state(&self) -> ViewState {
        ViewState::derive(&self.selection)
    }

    fn try_insert(&mut self, attribute: Attribute) -> Result<(), SelectionError> {
        if self.selection.len() >= MAX_SELECTIONS {
            warn!(%attribute, "selection limit reached; toggle rejected");
            return Err(SelectionError::SelectionLimitExceeded {
                attempted: attribute,
                max: MAX_SELECTIONS,
            });
        }
        self.selection.insert(attribute);
        debug!(%attribute, size = self.selection.len(), "attribute selected");
        Ok(())
    }
}
