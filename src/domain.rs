use uuid::Uuid;

/// A selectable language: identity is `id`, catalog order is display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Language {
    pub id: String,
    pub name: String,
    pub extension: String,
    pub sample_code: String,
}

/// One run attempt. Immutable once issued; `id` only tags tracing spans,
/// it never goes on the wire.
#[derive(Clone, Debug)]
pub struct ExecutionRequest {
    pub id: Uuid,
    pub language_id: String,
    pub source_code: String,
    pub stdin: Option<String>,
}

impl ExecutionRequest {
    pub fn new(language_id: &str, source_code: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            language_id: language_id.to_string(),
            source_code: source_code.to_string(),
            stdin: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Success,
    CompileError,
    RuntimeError,
    Timeout,
    MemoryExceeded,
    /// The exchange with the execution service failed; the program was
    /// never classified. Synthesized locally, never sent by the server
    /// under this name (wire spelling is `ERROR`).
    TransportError,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionResult {
    pub status: StatusKind,
    pub stdout: String,
    pub stderr: String,
    /// Meaningless (always 0) when `status == TransportError` — transport
    /// failures never reach the server's timer.
    pub duration_ms: u64,
}

impl ExecutionResult {
    /// Local stand-in for a run whose network exchange failed.
    pub fn transport_failure(diagnostic: String) -> Self {
        Self {
            status: StatusKind::TransportError,
            stdout: String::new(),
            stderr: diagnostic,
            duration_ms: 0,
        }
    }
}

/// The orchestrator's state. Exactly one exists per session; once `Running`
/// the attempt always resolves to `Completed` (possibly with a synthesized
/// transport-failure result) — there is no cancelled variant.
#[derive(Clone, Debug, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running(ExecutionRequest),
    Completed(ExecutionResult),
}

impl RunState {
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running(_))
    }

    pub fn result(&self) -> Option<&ExecutionResult> {
        match self {
            RunState::Completed(result) => Some(result),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorTheme {
    #[default]
    Dark,
    Light,
}

impl EditorTheme {
    pub fn toggled(self) -> Self {
        match self {
            EditorTheme::Dark => EditorTheme::Light,
            EditorTheme::Light => EditorTheme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EditorTheme::Dark => "vs-dark",
            EditorTheme::Light => "light",
        }
    }
}
