//! Applies UI events to the selection and the on-screen display state.

use triangle_core::{
    Example, Notice, SelectionController, SelectionError, ViewState, LIMIT_WARNING,
};

use crate::controller::events::UiEvent;

/// What the result card currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub view: ViewState,
    pub warning: Option<Notice>,
}

impl DisplayState {
    pub fn new(controller: &SelectionController) -> Self {
        Self {
            view: controller.derive_view_state(),
            warning: None,
        }
    }

    /// Examples to list; none while the limit warning is up.
    pub fn examples(&self) -> &'static [Example] {
        match self.warning {
            Some(_) => &[],
            None => self.view.examples,
        }
    }

    fn rerender(&mut self, controller: &SelectionController) {
        self.view = controller.derive_view_state();
        self.warning = None;
    }
}

/// Follow-up work the caller has to perform after a reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    ScheduleWarningRevert,
}

pub fn reduce(
    controller: &mut SelectionController,
    display: &mut DisplayState,
    event: UiEvent,
) -> Effect {
    match event {
        UiEvent::Toggle { attribute, source } => match controller.toggle(attribute) {
            Ok(outcome) => {
                tracing::debug!(%attribute, source = source.label(), ?outcome, "selection changed");
                display.rerender(controller);
                Effect::None
            }
            Err(SelectionError::SelectionLimitExceeded { .. }) => {
                display.warning = Some(LIMIT_WARNING);
                Effect::ScheduleWarningRevert
            }
            Err(err) => {
                tracing::error!(%err, source = source.label(), "rejected selection input");
                Effect::None
            }
        },
        // Not cancellable: a later change may already have cleared the warning,
        // in which case this is a plain re-render.
        UiEvent::WarningExpired => {
            display.rerender(controller);
            Effect::None
        }
    }
}
