use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A worker dispatched by one of the async strategies panicked or was cancelled.
    /// Operations themselves have no failure path, so this never occurs in a healthy run.
    #[error("worker task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}
