//! Decouples the editing widget from the orchestrator: the widget only holds
//! a [`TriggerBridge`] and emits a signal per run gesture; a spawned loop
//! turns signals into `Session::run` calls. Delivery is at-most-once per
//! gesture — the bridge never debounces or queues, and signals arriving
//! while a run is in flight are absorbed by the orchestrator's idle check.

use std::sync::Arc;

use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio::task::JoinHandle;

use crate::constants::TRIGGER_CHANNEL_CAPACITY;
use crate::session::Session;

/// One "run requested" gesture.
#[derive(Clone, Copy, Debug)]
pub struct RunSignal;

#[derive(Clone, Debug)]
pub struct TriggerBridge {
    tx: Sender<RunSignal>,
}

impl TriggerBridge {
    pub fn channel() -> (Self, Receiver<RunSignal>) {
        let (tx, rx) = mpsc::channel(TRIGGER_CHANNEL_CAPACITY);
        (Self { tx }, rx)
    }

    /// Emits a run gesture. A full or closed channel drops the signal.
    pub fn emit(&self) {
        if let Err(err) = self.tx.try_send(RunSignal) {
            tracing::debug!("Run signal dropped: {:?}", err);
        }
    }
}

/// Drains run signals for the session's lifetime. Each signal spawns the run
/// rather than awaiting it inline, so a gesture arriving mid-run reaches the
/// orchestrator immediately and is dropped there instead of queueing behind
/// the in-flight request.
pub fn handle_triggers(session: Arc<Session>, mut rx: Receiver<RunSignal>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(RunSignal) = rx.recv().await {
            tracing::debug!("Run signal received");
            let session = session.clone();
            tokio::spawn(async move {
                session.run().await;
            });
        }
    })
}
