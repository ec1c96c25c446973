use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum MandelbrotError {
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterationsError,
}
