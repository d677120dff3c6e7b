use thiserror::Error;

#[derive(Error, Debug)]
pub enum SQLError {
    #[error("query error: {0}")]
    Query(String),

    #[error("execution error: {0}")]
    Execution(String),

    #[error("connection error: {0}")]
    Connection(String),

    /// A UNIQUE or PRIMARY KEY constraint rejected the statement.
    /// Carries the engine's message unchanged.
    #[error("{0}")]
    UniqueViolation(String),

    /// Any other constraint (NOT NULL, CHECK, FOREIGN KEY) rejected the statement.
    #[error("{0}")]
    Constraint(String),
}
