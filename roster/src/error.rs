use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("roster is still loading")]
    Loading,

    #[error("row {index} out of range: roster has {len} rows")]
    RowOutOfRange { index: usize, len: usize },

    #[error("unknown sort field {0:?} (expected \"lockTotal\" or \"delegatorCount\")")]
    UnknownField(String),
}
