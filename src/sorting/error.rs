use thiserror::Error;

// Error type for configuration-search operations.
#[derive(Error, Debug, Clone)]
pub enum SearchError {
    /// The goal configuration is unreachable from the start configuration.
    #[error("no sequence of moves reaches the goal configuration")]
    NoSolution,

    /// The diagram text does not have the expected rectangular shape.
    #[error("malformed diagram: {0}")]
    MalformedDiagram(String),
}
