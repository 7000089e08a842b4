use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("grid size {0:?} does not have the proper format such as 10x10")]
    MalformedGrid(String),
    #[error("grid size {columns}x{rows} must have at least one column and one row")]
    NonPositiveGrid { columns: u32, rows: u32 },
    #[error("unknown path kind {0:?}, expected min or max")]
    UnknownPathKind(String),
    #[error("user token {0:?} is not a valid UUID")]
    InvalidUserToken(String),
}
