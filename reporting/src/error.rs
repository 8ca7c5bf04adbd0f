use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("No reward histories to report")]
    NoHistories,
    #[error("Reward history of trial {0} is empty")]
    EmptyTrial(usize),
    #[error("Unknown policy `{0}`")]
    UnknownPolicy(String),
    #[error("Failed to draw figure: {0}")]
    Drawing(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub(crate) fn drawing<E: std::fmt::Display>(err: E) -> ReportError {
    ReportError::Drawing(err.to_string())
}
