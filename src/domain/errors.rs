//! Failures surfaced by member and team operations

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No row for the named entity kind ("Member", "Team")
    NotFound(&'static str),
    /// Input rejected before reaching the store
    Validation(String),
    /// Error reported by the store
    Database(String),
}

impl DomainError {
    pub fn member_not_found() -> Self {
        DomainError::NotFound("Member")
    }

    pub fn team_not_found() -> Self {
        DomainError::NotFound("Team")
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound(entity) => write!(f, "{} not found", entity),
            DomainError::Validation(msg) => f.write_str(msg),
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}
