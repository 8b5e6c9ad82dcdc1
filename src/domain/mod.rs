//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no SeaORM, no Axum).
//! Search conditions and predicates, repository traits and domain error types.

pub mod errors;
pub mod repositories;
pub mod search;

pub use errors::DomainError;
pub use repositories::*;
pub use search::{Clause, MemberRecord, MemberSearchCondition, Predicate};
