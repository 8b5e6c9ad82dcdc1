//! Translation of domain search predicates into SeaORM conditions

use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition};

use crate::domain::{Clause, Predicate};
use crate::models::{member, team};

/// Fold the predicate's clauses into `Condition::all()`.
///
/// Returns `None` for the identity predicate: an empty `Condition::all()`
/// still renders as `WHERE TRUE`, so callers skip the filter instead.
/// Team clauses reference the `teams` table, so the query must join it.
pub fn to_condition(predicate: &Predicate) -> Option<Condition> {
    if predicate.is_identity() {
        return None;
    }

    Some(
        predicate
            .clauses()
            .iter()
            .fold(Condition::all(), |condition, clause| {
                condition.add(clause_expr(clause))
            }),
    )
}

fn clause_expr(clause: &Clause) -> SimpleExpr {
    match clause {
        Clause::UsernameEq(username) => member::Column::Username.eq(username.as_str()),
        Clause::TeamNameEq(name) => team::Column::Name.eq(name.as_str()),
        Clause::AgeGoe(age) => member::Column::Age.gte(*age),
        Clause::AgeLoe(age) => member::Column::Age.lte(*age),
    }
}
