//! Queueing of widget events and the one-shot warning timer.

use std::{thread, time::Duration};

use crossbeam_channel::{Sender, TrySendError};

use crate::controller::events::UiEvent;

pub fn dispatch_ui_event(ui_tx: &Sender<UiEvent>, event: UiEvent, status: &mut String) {
    match ui_tx.try_send(event) {
        Ok(()) => {
            status.clear();
            tracing::debug!(?event, "queued ui event");
        }
        Err(TrySendError::Full(_)) => {
            *status = "Input queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Input queue disconnected; restart the app".to_string();
        }
    }
}

/// Sends [`UiEvent::WarningExpired`] once after `delay`, then calls `wake` so
/// the UI drains it.
pub fn schedule_warning_revert(
    ui_tx: Sender<UiEvent>,
    delay: Duration,
    wake: impl FnOnce() + Send + 'static,
) {
    let spawned = thread::Builder::new()
        .name("warning-revert".to_string())
        .spawn(move || {
            thread::sleep(delay);
            if ui_tx.send(UiEvent::WarningExpired).is_ok() {
                wake();
            }
        });
    if let Err(err) = spawned {
        tracing::error!(%err, "failed to start warning revert timer");
    }
}
