//! End-to-end scenarios over the stubbed backend: catalog bootstrap, a full
//! edit-run-present cycle, and the degraded paths (offline catalog,
//! transport-failed execution).

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{ExecutionResult, Language, RunState, StatusKind};
use crate::http::client::MockExecutionBackend;
use crate::presenter::{self, Severity};
use crate::session::Session;
use crate::stubs::backend::{BackendStub, StubError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn remote_language(id: &str, name: &str, sample: &str) -> Language {
    Language {
        id: id.to_string(),
        name: name.to_string(),
        extension: format!(".{id}"),
        sample_code: sample.to_string(),
    }
}

#[tokio::test]
async fn python_wins_the_default_even_when_not_first() {
    init_tracing();
    let mut backend = MockExecutionBackend::new();
    backend.expect_languages().times(1).returning(|| {
        Ok(vec![
            remote_language("go", "Go", "package main"),
            remote_language("python", "Python", "print(\"Hello, World!\")"),
        ])
    });

    let session = Session::new(Arc::new(backend));
    session.bootstrap().await;

    assert_eq!(session.active_language().unwrap().id, "python");
    assert_eq!(session.code(), "print(\"Hello, World!\")");
}

#[tokio::test]
async fn first_entry_is_the_default_without_python() {
    let mut backend = MockExecutionBackend::new();
    backend.expect_languages().times(1).returning(|| {
        Ok(vec![
            remote_language("go", "Go", "package main"),
            remote_language("rust", "Rust", "fn main() {}"),
        ])
    });

    let session = Session::new(Arc::new(backend));
    session.bootstrap().await;

    assert_eq!(session.active_language().unwrap().id, "go");
    assert_eq!(session.code(), "package main");
}

#[tokio::test]
async fn successful_run_presents_the_success_label() {
    let mut backend = MockExecutionBackend::new();
    backend
        .expect_languages()
        .times(1)
        .returning(|| Ok(vec![remote_language("rust", "Rust", "// sample")]));
    backend
        .expect_execute()
        .withf(|request| request.language_id == "rust" && request.source_code == "fn main() {}")
        .times(1)
        .returning(|_| {
            Ok(ExecutionResult {
                status: StatusKind::Success,
                stdout: String::new(),
                stderr: String::new(),
                duration_ms: 5,
            })
        });

    let session = Session::new(Arc::new(backend));
    session.bootstrap().await;
    session.select_language("rust").unwrap();
    session.set_code("fn main() {}");

    session.run().await;

    let state = session.run_state();
    let model = presenter::present(&state);
    assert_eq!(model.label, "Execution Successful");
    assert_eq!(model.severity, Severity::Success);

    // Empty stdout and stderr: the panel shows the note, not a warning.
    let result = state.result().unwrap();
    assert!(result.stdout.is_empty());
    assert!(result.stderr.is_empty());
    assert_eq!(
        presenter::empty_output_note(),
        "Program executed successfully with no output."
    );
}

#[tokio::test]
async fn transport_failed_run_presents_a_synthesized_error() {
    let backend = BackendStub::new(
        Ok(vec![remote_language("rust", "Rust", "// sample")]),
        Err(StubError::Unreachable("connection refused".to_string())),
        Duration::ZERO,
    );
    let session = Session::new(Arc::new(backend));
    session.bootstrap().await;
    session.select_language("rust").unwrap();
    session.set_code("fn main() {}");

    session.run().await;

    let state = session.run_state();
    let result = state.result().expect("run must settle to a result");
    assert_eq!(result.status, StatusKind::TransportError);
    assert_eq!(result.duration_ms, 0);
    assert!(!result.stderr.is_empty());

    let model = presenter::present(&state);
    assert_eq!(model.label, "Error");
    assert_eq!(model.severity, Severity::Error);
}

#[tokio::test]
async fn offline_bootstrap_still_allows_editing_and_selection() {
    init_tracing();
    let backend = BackendStub::new(
        Err(StubError::Unreachable("no route to host".to_string())),
        Err(StubError::Unreachable("no route to host".to_string())),
        Duration::ZERO,
    );
    let session = Session::new(Arc::new(backend));
    session.bootstrap().await;

    // Fallback catalog is live, with the advisory raised.
    assert!(session.notice().is_some());
    assert_eq!(session.active_language().unwrap().id, "python");

    session.select_language("bash").unwrap();
    assert!(session.code().starts_with("#!/bin/bash"));

    // Only execution degrades: it settles to a transport-error result.
    session.run().await;
    let state = session.run_state();
    assert_eq!(state.result().unwrap().status, StatusKind::TransportError);
}

#[tokio::test]
async fn server_classified_failures_are_normal_results() {
    let failures = [
        (StatusKind::CompileError, "Compilation Error"),
        (StatusKind::RuntimeError, "Runtime Error"),
        (StatusKind::Timeout, "Time Limit Exceeded"),
        (StatusKind::MemoryExceeded, "Memory Limit Exceeded"),
    ];

    for (status, label) in failures {
        let backend = BackendStub::new(
            Ok(vec![remote_language("c", "C", "int main() {}")]),
            Ok(ExecutionResult {
                status,
                stdout: String::new(),
                stderr: "something went wrong".to_string(),
                duration_ms: 12,
            }),
            Duration::ZERO,
        );
        let session = Session::new(Arc::new(backend));
        session.bootstrap().await;

        session.run().await;

        let state = session.run_state();
        assert!(matches!(state, RunState::Completed(_)));
        assert_eq!(presenter::present(&state).label, label);
        // Duration came from the server's timer, untouched.
        assert_eq!(state.result().unwrap().duration_ms, 12);
    }
}
