use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the test database or create its tables.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Failed to create or write to a temporary fixture directory.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
