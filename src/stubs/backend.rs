use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::domain::{ExecutionRequest, ExecutionResult, Language};
use crate::http::client::{BackendError, ExecutionBackend};

/// Canned responses for a stubbed execution service. Errors are stored as
/// reconstructible shapes because `BackendError` does not clone.
#[derive(Clone, Debug)]
pub enum StubError {
    Unreachable(String),
    Server { status: u16, message: String },
}

impl StubError {
    fn materialize(&self) -> BackendError {
        match self {
            // A decode failure stands in for "no usable response at all".
            StubError::Unreachable(msg) => BackendError::Decode(serde::de::Error::custom(msg)),
            StubError::Server { status, message } => BackendError::Server {
                status: StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                message: message.clone(),
            },
        }
    }
}

/// Test double for the remote boundary: fixed results plus an artificial
/// delay, and a counter of issued execute calls.
#[derive(Debug)]
pub struct BackendStub {
    languages: Result<Vec<Language>, StubError>,
    execute: Result<ExecutionResult, StubError>,
    delay: Duration,
    execute_calls: AtomicUsize,
}

impl BackendStub {
    pub fn new(
        languages: Result<Vec<Language>, StubError>,
        execute: Result<ExecutionResult, StubError>,
        delay: Duration,
    ) -> Self {
        Self {
            languages,
            execute,
            delay,
            execute_calls: AtomicUsize::new(0),
        }
    }

    pub fn execute_calls(&self) -> usize {
        self.execute_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExecutionBackend for BackendStub {
    async fn languages(&self) -> Result<Vec<Language>, BackendError> {
        tokio::time::sleep(self.delay).await;
        self.languages
            .clone()
            .map_err(|err| err.materialize())
    }

    #[tracing::instrument(skip(self))]
    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionResult, BackendError> {
        self.execute_calls.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("Stub execution: {:?}", request);
        tokio::time::sleep(self.delay).await;
        self.execute.clone().map_err(|err| err.materialize())
    }

    async fn health(&self) -> bool {
        self.languages.is_ok()
    }
}
