//! Client-side orchestration for a remote code-execution service: an
//! editable source buffer per selectable language, a single-in-flight run
//! state machine, and a pure presenter for the classified result. The
//! editing widget and the sandboxed execution engine are external; this
//! crate owns everything between "run requested" and "result displayed".

pub mod bridge;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod domain;
pub mod http;
pub mod orchestrator;
pub mod presenter;
pub mod session;
pub mod stubs;

#[cfg(test)]
mod integration_test;

pub use catalog::{CatalogLoad, CatalogSource, LanguageCatalog};
pub use config::Config;
pub use domain::{
    EditorTheme, ExecutionRequest, ExecutionResult, Language, RunState, StatusKind,
};
pub use http::client::{BackendError, ExecutionBackend, HttpBackend};
pub use orchestrator::{RunOrchestrator, RunOutcome};
pub use presenter::{DisplayModel, IconKind, Severity, present};
pub use session::{Session, SessionError};
