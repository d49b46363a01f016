//! Wire shapes for the execution service's JSON protocol.

use serde::{Deserialize, Serialize};

/// Entry of `GET {base}/languages`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDto {
    pub id: String,
    pub name: String,
    pub extension: String,
    pub sample_code: String,
}

/// Body of `POST {base}/execute`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ExecuteRequestDto {
    pub language: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdin: Option<String>,
}

/// Response of `POST {base}/execute`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteResponseDto {
    pub output: String,
    pub error: String,
    pub execution_time: u64,
    pub status: ExecutionStatusDto,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionStatusDto {
    Success,
    CompileError,
    RuntimeError,
    Timeout,
    MemoryExceeded,
    Error,
}

/// Error bodies the server may attach to a non-2xx `/execute` response.
/// Only `error` matters to the client; everything else is ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBodyDto {
    pub error: Option<String>,
}
