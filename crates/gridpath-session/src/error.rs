use std::fmt;

/// Why a search request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSearch {
    /// No cell holds the start role.
    MissingStart,
    /// No cell holds the end role.
    MissingEnd,
    /// Start and end are the same cell.
    SameStartEnd,
}

/// Errors returned by [`Session::apply`](crate::Session::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A run command whose preconditions do not hold.
    InvalidSearchRequest(InvalidSearch),
}

impl fmt::Display for InvalidSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => f.write_str("no start node placed"),
            Self::MissingEnd => f.write_str("no end node placed"),
            Self::SameStartEnd => f.write_str("start and end are the same node"),
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSearchRequest(why) => write!(f, "invalid search request: {why}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<InvalidSearch> for SessionError {
    fn from(why: InvalidSearch) -> Self {
        Self::InvalidSearchRequest(why)
    }
}
