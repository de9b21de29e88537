pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure reported by an injected collaborator (request sender, duration probe).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Reasons a response body does not match its declared multipart structure.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("multipart/related content type has no boundary parameter")]
    MissingBoundary,
    #[error("unexpected content before the first boundary at byte {offset}")]
    Preamble { offset: usize },
    #[error("input ended while a part or header was still open")]
    UnexpectedEof,
    #[error("boundary at byte {offset} is not followed by a line break or end marker")]
    MissingBoundaryTerminator { offset: usize },
    #[error("content beyond the end of the multipart body at byte {offset}")]
    ContentBeyondEnd { offset: usize },
    #[error("header line without a colon at byte {offset}")]
    MalformedHeader { offset: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to decode response: {0}")]
    Decode(#[from] DecodeError),
    #[error("control part is not valid JSON: {0}")]
    InvalidControlPart(#[source] serde_json::Error),
    #[error("continuation request {hop} failed: {source}")]
    ContinuationRequestFailed {
        hop: usize,
        #[source]
        source: BoxError,
    },
    #[error("failed to probe duration of audio part {index}: {source}")]
    ProbeFailed {
        index: usize,
        #[source]
        source: BoxError,
    },
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service replied with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("failed to serialize request: {0}")]
    Json(#[from] serde_json::Error),
}
