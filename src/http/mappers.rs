use crate::domain::{ExecutionRequest, ExecutionResult, Language, StatusKind};
use crate::http::models::{ExecuteRequestDto, ExecuteResponseDto, ExecutionStatusDto, LanguageDto};

impl From<LanguageDto> for Language {
    fn from(dto: LanguageDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            extension: dto.extension,
            sample_code: dto.sample_code,
        }
    }
}

impl From<&ExecutionRequest> for ExecuteRequestDto {
    fn from(request: &ExecutionRequest) -> Self {
        Self {
            language: request.language_id.clone(),
            code: request.source_code.clone(),
            stdin: request.stdin.clone(),
        }
    }
}

impl From<ExecutionStatusDto> for StatusKind {
    fn from(status: ExecutionStatusDto) -> Self {
        match status {
            ExecutionStatusDto::Success => StatusKind::Success,
            ExecutionStatusDto::CompileError => StatusKind::CompileError,
            ExecutionStatusDto::RuntimeError => StatusKind::RuntimeError,
            ExecutionStatusDto::Timeout => StatusKind::Timeout,
            ExecutionStatusDto::MemoryExceeded => StatusKind::MemoryExceeded,
            ExecutionStatusDto::Error => StatusKind::TransportError,
        }
    }
}

impl From<ExecuteResponseDto> for ExecutionResult {
    fn from(dto: ExecuteResponseDto) -> Self {
        Self {
            status: dto.status.into(),
            stdout: dto.output,
            stderr: dto.error,
            duration_ms: dto.execution_time,
        }
    }
}
