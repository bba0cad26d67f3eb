//! Event delivery to external collaborators (scoring, progression, UI,
//! audio).
//!
//! Collaborators observe `SimEvent`s and may reply with `PlayerCommand`s,
//! which the engine applies at the next frame boundary. A collaborator
//! that errors or panics is logged and skipped; the frame and the other
//! collaborators are unaffected.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;
use tracing::warn;

use arena_core::commands::PlayerCommand;
use arena_core::events::SimEvent;

#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("{0}")]
    Failed(String),
    #[error("panicked: {0}")]
    Panicked(String),
}

/// An observer of simulation events.
pub trait Collaborator {
    fn name(&self) -> &str;

    /// Handle one event. Commands pushed to `replies` are applied next frame;
    /// they are discarded if the handler fails.
    fn on_event(
        &mut self,
        event: &SimEvent,
        replies: &mut Vec<PlayerCommand>,
    ) -> Result<(), CollaboratorError>;
}

/// What happened during one dispatch pass.
#[derive(Debug, Default)]
pub struct DispatchReport {
    pub delivered: usize,
    pub failures: Vec<(String, CollaboratorError)>,
    pub replies: Vec<PlayerCommand>,
}

/// Deliver every event to every collaborator, in order.
pub fn dispatch_events(
    events: &[SimEvent],
    collaborators: &mut [Box<dyn Collaborator>],
) -> DispatchReport {
    let mut report = DispatchReport::default();

    for event in events {
        for collaborator in collaborators.iter_mut() {
            let mut replies = Vec::new();
            let result =
                panic::catch_unwind(AssertUnwindSafe(|| collaborator.on_event(event, &mut replies)));
            let error = match result {
                Ok(Ok(())) => {
                    report.delivered += 1;
                    report.replies.append(&mut replies);
                    continue;
                }
                Ok(Err(err)) => err,
                Err(payload) => CollaboratorError::Panicked(panic_message(payload.as_ref())),
            };
            let name = collaborator.name().to_string();
            warn!(collaborator = %name, %error, "collaborator failed");
            report.failures.push((name, error));
        }
    }
    report
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
