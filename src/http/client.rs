use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::Config;
use crate::constants::GENERIC_EXECUTE_FAILURE;
use crate::domain::{ExecutionRequest, ExecutionResult, Language};
use crate::http::models::{ErrorBodyDto, ExecuteRequestDto, ExecuteResponseDto, LanguageDto};

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-2xx response whose body carried a server-supplied error message.
    #[error("{message}")]
    Server { status: StatusCode, message: String },
    /// Non-2xx response with no decodable error body.
    #[error("server returned {status}")]
    Status { status: StatusCode },
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl BackendError {
    /// Best available text for the synthesized transport-failure result:
    /// server-supplied message first, then the transport error itself,
    /// then a generic fallback.
    pub fn diagnostic(&self) -> String {
        let text = match self {
            BackendError::Server { message, .. } => message.clone(),
            other => other.to_string(),
        };
        if text.trim().is_empty() {
            GENERIC_EXECUTE_FAILURE.to_string()
        } else {
            text
        }
    }
}

/// The remote execution service, seen from the client.
#[mockall::automock]
#[async_trait]
pub trait ExecutionBackend: std::fmt::Debug + Send + Sync {
    async fn languages(&self) -> Result<Vec<Language>, BackendError>;

    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionResult, BackendError>;

    /// Liveness probe: any 2xx on `/health` counts, no body contract.
    async fn health(&self) -> bool;
}

#[derive(Clone, Debug)]
pub struct HttpBackend {
    base: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: &Config) -> Self {
        Self {
            base: config.api_base.clone(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Turns a non-2xx `/execute` response into the richest error available.
    async fn execute_failure(response: reqwest::Response) -> BackendError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorBodyDto>(&body) {
            Ok(ErrorBodyDto {
                error: Some(message),
            }) if !message.trim().is_empty() => BackendError::Server { status, message },
            _ => BackendError::Status { status },
        }
    }
}

#[async_trait]
impl ExecutionBackend for HttpBackend {
    #[tracing::instrument(skip(self))]
    async fn languages(&self) -> Result<Vec<Language>, BackendError> {
        let response = self.client.get(self.endpoint("/languages")).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status { status });
        }

        let body = response.text().await?;
        let languages: Vec<LanguageDto> = serde_json::from_str(&body)?;
        tracing::debug!("Loaded {} languages from server", languages.len());
        Ok(languages.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(skip(self, request), fields(id = %request.id, language = %request.language_id))]
    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionResult, BackendError> {
        let response = self
            .client
            .post(self.endpoint("/execute"))
            .json(&ExecuteRequestDto::from(request))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::execute_failure(response).await);
        }

        let body = response.text().await?;
        let dto: ExecuteResponseDto = serde_json::from_str(&body)?;
        tracing::debug!("Execution response: {:?}", dto);
        Ok(dto.into())
    }

    #[tracing::instrument(skip(self))]
    async fn health(&self) -> bool {
        match self.client.get(self.endpoint("/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                tracing::debug!("Health probe failed: {:?}", err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let backend = HttpBackend::new(&Config::new("http://localhost:8080/api"));
        assert_eq!(
            backend.endpoint("/execute"),
            "http://localhost:8080/api/execute"
        );
    }

    #[test]
    fn default_base_yields_relative_endpoints() {
        let backend = HttpBackend::new(&Config::default());
        assert_eq!(backend.endpoint("/languages"), "/api/languages");
    }

    #[test]
    fn diagnostic_prefers_server_message() {
        let err = BackendError::Server {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "compiler pool exhausted".to_string(),
        };
        assert_eq!(err.diagnostic(), "compiler pool exhausted");
    }

    #[test]
    fn diagnostic_falls_back_to_transport_text() {
        let err = BackendError::Status {
            status: StatusCode::BAD_GATEWAY,
        };
        assert_eq!(err.diagnostic(), "server returned 502 Bad Gateway");
    }

    #[test]
    fn blank_server_message_falls_back_to_generic_text() {
        let err = BackendError::Server {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "   ".to_string(),
        };
        assert_eq!(err.diagnostic(), GENERIC_EXECUTE_FAILURE);
    }
}
