/// Base URL used when `RUNPAD_API_URL` is unset.
pub const DEFAULT_API_BASE: &str = "/api";

/// Advisory banner text shown when the language catalog falls back offline.
pub const OFFLINE_NOTICE: &str = "Failed to connect to server. Using offline mode.";

/// Diagnostic of last resort for a transport-failed run.
pub const GENERIC_EXECUTE_FAILURE: &str = "Failed to execute code. Please try again.";

/// Slack in the trigger channel. Signals beyond this are dropped, not queued.
pub const TRIGGER_CHANNEL_CAPACITY: usize = 8;
