use std::sync::{Arc, Mutex};

use crate::catalog::{CatalogSource, LanguageCatalog};
use crate::constants::OFFLINE_NOTICE;
use crate::domain::{EditorTheme, Language, RunState};
use crate::http::client::ExecutionBackend;
use crate::orchestrator::{RunOrchestrator, RunOutcome};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("unknown language: {id}")]
    UnknownLanguage { id: String },
}

#[derive(Debug, Default)]
struct SessionInner {
    catalog: LanguageCatalog,
    active_language: Option<String>,
    code: String,
    theme: EditorTheme,
    notice: Option<String>,
}

/// One editing session: the catalog, the active-language/source-text pair,
/// the theme tag, the advisory notice, and the run state machine. All
/// mutation goes through these methods; the lock is never held across an
/// await.
#[derive(Debug)]
pub struct Session {
    backend: Arc<dyn ExecutionBackend>,
    orchestrator: RunOrchestrator,
    inner: Mutex<SessionInner>,
}

impl Session {
    pub fn new(backend: Arc<dyn ExecutionBackend>) -> Self {
        Self {
            orchestrator: RunOrchestrator::new(backend.clone()),
            backend,
            inner: Mutex::new(SessionInner::default()),
        }
    }

    /// Loads the catalog and selects the default language. On a fallback
    /// load this is the one place the offline notice is raised.
    #[tracing::instrument(skip(self))]
    pub async fn bootstrap(&self) {
        let load = LanguageCatalog::load(self.backend.as_ref()).await;

        let mut inner = self.lock_inner();
        if let CatalogSource::Fallback { reason } = &load.source {
            tracing::warn!("Session starting in offline mode: {}", reason);
            inner.notice = Some(OFFLINE_NOTICE.to_string());
        }
        inner.catalog = load.catalog;
        if let Some(language) = inner.catalog.default_language() {
            let (id, sample) = (language.id.clone(), language.sample_code.clone());
            inner.active_language = Some(id);
            inner.code = sample;
        }
    }

    /// Activates a catalog entry and resets the buffer to its sample.
    /// Also discards any displayed result and the offline notice.
    pub fn select_language(&self, id: &str) -> Result<(), SessionError> {
        {
            let mut inner = self.lock_inner();
            let Some(language) = inner.catalog.get(id) else {
                return Err(SessionError::UnknownLanguage { id: id.to_string() });
            };
            let sample = language.sample_code.clone();
            inner.active_language = Some(id.to_string());
            inner.code = sample;
            inner.notice = None;
        }
        self.orchestrator.clear();
        Ok(())
    }

    /// Replaces the buffer with edited text. Editing never resets anything.
    pub fn set_code(&self, text: &str) {
        self.lock_inner().code = text.to_string();
    }

    /// Restores the active language's sample and discards the displayed
    /// result. No-op without an active language.
    pub fn reset(&self) {
        {
            let mut inner = self.lock_inner();
            let Some(sample) = inner
                .active_language
                .as_deref()
                .and_then(|id| inner.catalog.get(id))
                .map(|language| language.sample_code.clone())
            else {
                return;
            };
            inner.code = sample;
            inner.notice = None;
        }
        self.orchestrator.clear();
    }

    pub fn toggle_theme(&self) {
        let mut inner = self.lock_inner();
        inner.theme = inner.theme.toggled();
    }

    pub fn dismiss_notice(&self) {
        self.lock_inner().notice = None;
    }

    /// Runs the current buffer under the active language. Ignored without an
    /// active language or while a run is in flight.
    pub async fn run(&self) -> RunOutcome {
        let (language_id, code) = {
            let inner = self.lock_inner();
            match &inner.active_language {
                Some(id) => (id.clone(), inner.code.clone()),
                None => {
                    tracing::debug!("Run requested with no active language");
                    return RunOutcome::Ignored;
                }
            }
        };
        self.orchestrator.run(&language_id, &code).await
    }

    pub fn code(&self) -> String {
        self.lock_inner().code.clone()
    }

    pub fn theme(&self) -> EditorTheme {
        self.lock_inner().theme
    }

    pub fn notice(&self) -> Option<String> {
        self.lock_inner().notice.clone()
    }

    pub fn active_language(&self) -> Option<Language> {
        let inner = self.lock_inner();
        inner
            .active_language
            .as_deref()
            .and_then(|id| inner.catalog.get(id))
            .cloned()
    }

    pub fn languages(&self) -> Vec<Language> {
        self.lock_inner().catalog.languages().to_vec()
    }

    pub fn run_state(&self) -> RunState {
        self.orchestrator.state()
    }

    pub fn is_running(&self) -> bool {
        self.orchestrator.is_running()
    }

    fn lock_inner(&self) -> std::sync::MutexGuard<'_, SessionInner> {
        self.inner.lock().expect("session lock poisoned")
    }
}
