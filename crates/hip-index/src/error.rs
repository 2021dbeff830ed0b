use hip_core::error::IndexError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] IndexError),

    #[error("config error: {0}")]
    Config(String),

    #[error("usage error: {0}")]
    Usage(String),

    #[error("outputs out of date: {}", .0.join(", "))]
    Stale(Vec<String>),
}
