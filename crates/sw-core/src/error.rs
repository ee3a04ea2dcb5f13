use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid panel id: {value:?} (expected one of A, B, C, D)")]
    InvalidPanelId { value: String },
}
