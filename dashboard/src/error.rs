use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("invalid data: {0}")]
    Types(#[from] votelens_types::TypesError),

    #[error("roster error: {0}")]
    Roster(#[from] votelens_roster::RosterError),

    #[error("config error: {0}")]
    Config(String),

    #[error("snapshot error: {0}")]
    Snapshot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
