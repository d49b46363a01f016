use std::sync::{Arc, Mutex};

use crate::domain::{ExecutionRequest, ExecutionResult, RunState};
use crate::http::client::ExecutionBackend;

/// What a call to [`RunOrchestrator::run`] did.
#[derive(Clone, Debug)]
pub enum RunOutcome {
    Finished(ExecutionResult),
    /// Dropped at the idle check: a run was already in flight. The trigger
    /// does not queue and does not cancel anything.
    Ignored,
}

/// The run-lifecycle state machine. Owns the single `RunState` and enforces
/// one in-flight execution: a `run` issued while `Running` is silently
/// ignored, so the applied result is always that of the only issued request.
#[derive(Debug)]
pub struct RunOrchestrator {
    backend: Arc<dyn ExecutionBackend>,
    // Never held across an await; the remote call runs with the lock released.
    state: Mutex<RunState>,
}

impl RunOrchestrator {
    pub fn new(backend: Arc<dyn ExecutionBackend>) -> Self {
        Self {
            backend,
            state: Mutex::new(RunState::Idle),
        }
    }

    pub fn state(&self) -> RunState {
        self.state.lock().expect("run state lock poisoned").clone()
    }

    pub fn is_running(&self) -> bool {
        self.state().is_running()
    }

    /// Discards any completed result, returning to `Idle`. No effect on a
    /// run in flight.
    pub fn clear(&self) {
        let mut state = self.state.lock().expect("run state lock poisoned");
        if !state.is_running() {
            *state = RunState::Idle;
        }
    }

    /// Submits one run. Every path resolves to `Completed`: a transport
    /// failure is synthesized into an `ExecutionResult` rather than raised,
    /// and the caller distinguishes outcomes purely via `status`.
    #[tracing::instrument(skip(self, source_code))]
    pub async fn run(&self, language_id: &str, source_code: &str) -> RunOutcome {
        let request = ExecutionRequest::new(language_id, source_code);
        {
            let mut state = self.state.lock().expect("run state lock poisoned");
            if state.is_running() {
                tracing::debug!("Run already in flight, dropping trigger");
                return RunOutcome::Ignored;
            }
            // Entering Running also clears any previously displayed result.
            *state = RunState::Running(request.clone());
        }

        tracing::info!("Executing request {} ({})", request.id, request.language_id);
        let result = match self.backend.execute(&request).await {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!("Execution transport failure: {:?}", err);
                ExecutionResult::transport_failure(err.diagnostic())
            }
        };

        // One state write settles the run: there is no window where the
        // result is visible while the state still reads as running.
        {
            let mut state = self.state.lock().expect("run state lock poisoned");
            *state = RunState::Completed(result.clone());
        }
        tracing::info!("Run {} completed: {:?}", request.id, result.status);
        RunOutcome::Finished(result)
    }
}
