//! Pure mapping from run state to display classification. No mutation, no
//! memory of prior results; safe to call on every re-render.

use crate::domain::{RunState, StatusKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Terminal,
    Spinner,
    Check,
    Alert,
    Clock,
    Gauge,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Neutral,
    Success,
    Error,
    Warning,
    Critical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayModel {
    pub icon: IconKind,
    pub label: &'static str,
    pub severity: Severity,
}

const IDLE: DisplayModel = DisplayModel {
    icon: IconKind::Terminal,
    label: "Output",
    severity: Severity::Neutral,
};

const RUNNING: DisplayModel = DisplayModel {
    icon: IconKind::Spinner,
    label: "Running...",
    severity: Severity::Neutral,
};

pub fn present(state: &RunState) -> DisplayModel {
    match state {
        RunState::Idle => IDLE,
        RunState::Running(_) => RUNNING,
        RunState::Completed(result) => present_status(result.status),
    }
}

fn present_status(status: StatusKind) -> DisplayModel {
    let (icon, label, severity) = match status {
        StatusKind::Success => (IconKind::Check, "Execution Successful", Severity::Success),
        StatusKind::CompileError => (IconKind::Alert, "Compilation Error", Severity::Error),
        StatusKind::RuntimeError => (IconKind::Alert, "Runtime Error", Severity::Error),
        StatusKind::Timeout => (IconKind::Clock, "Time Limit Exceeded", Severity::Warning),
        StatusKind::MemoryExceeded => (
            IconKind::Gauge,
            "Memory Limit Exceeded",
            Severity::Critical,
        ),
        StatusKind::TransportError => (IconKind::Alert, "Error", Severity::Error),
    };
    DisplayModel {
        icon,
        label,
        severity,
    }
}

/// Heading for the stderr section of the output panel. Compile errors get
/// their own heading; every other failing status shares the generic one,
/// since the status line above it already names the failure.
pub fn error_heading(status: StatusKind) -> &'static str {
    match status {
        StatusKind::CompileError => "Compilation Error",
        _ => "Error Output",
    }
}

/// Shown when a completed run produced neither stdout nor stderr.
pub fn empty_output_note() -> &'static str {
    "Program executed successfully with no output."
}
