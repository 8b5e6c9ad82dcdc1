//! Dynamic member search
//!
//! A `MemberSearchCondition` holds optional filters. Composing it yields a
//! `Predicate`: the conjunction of one clause per present filter. Absent
//! filters contribute nothing, so an empty condition composes to the identity
//! predicate which matches every record.

use std::fmt;

/// Read access to the attributes a search predicate can test.
pub trait MemberRecord {
    fn username(&self) -> &str;
    fn age(&self) -> i32;
    /// Name of the member's team, `None` when the member has no team.
    fn team_name(&self) -> Option<&str>;
}

/// Optional search criteria for members.
///
/// Fields are private: build a condition with the consuming setters.
/// Blank strings count as absent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemberSearchCondition {
    username: Option<String>,
    team_name: Option<String>,
    age_min: Option<i32>,
    age_max: Option<i32>,
}

impl MemberSearchCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    /// Inclusive lower bound on age.
    pub fn age_min(mut self, age: i32) -> Self {
        self.age_min = Some(age);
        self
    }

    /// Inclusive upper bound on age.
    pub fn age_max(mut self, age: i32) -> Self {
        self.age_max = Some(age);
        self
    }

    pub fn username_filter(&self) -> Option<&str> {
        has_text(&self.username)
    }

    pub fn team_name_filter(&self) -> Option<&str> {
        has_text(&self.team_name)
    }

    pub fn age_min_filter(&self) -> Option<i32> {
        self.age_min
    }

    pub fn age_max_filter(&self) -> Option<i32> {
        self.age_max
    }

    /// Compose the present filters into a single conjunctive predicate.
    ///
    /// Clause order is fixed (username, team, lower bound, upper bound) so the
    /// same condition always produces the same predicate.
    pub fn compose(&self) -> Predicate {
        [
            username_eq(self),
            team_name_eq(self),
            age_goe(self),
            age_loe(self),
        ]
        .into_iter()
        .flatten()
        .fold(Predicate::all(), Predicate::and)
    }
}

impl From<&MemberSearchCondition> for Predicate {
    fn from(condition: &MemberSearchCondition) -> Self {
        condition.compose()
    }
}

fn has_text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

fn username_eq(condition: &MemberSearchCondition) -> Option<Clause> {
    condition
        .username_filter()
        .map(|u| Clause::UsernameEq(u.to_string()))
}

fn team_name_eq(condition: &MemberSearchCondition) -> Option<Clause> {
    condition
        .team_name_filter()
        .map(|t| Clause::TeamNameEq(t.to_string()))
}

fn age_goe(condition: &MemberSearchCondition) -> Option<Clause> {
    condition.age_min_filter().map(Clause::AgeGoe)
}

fn age_loe(condition: &MemberSearchCondition) -> Option<Clause> {
    condition.age_max_filter().map(Clause::AgeLoe)
}

/// A single test over one member attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    UsernameEq(String),
    TeamNameEq(String),
    /// age >= bound
    AgeGoe(i32),
    /// age <= bound
    AgeLoe(i32),
}

impl Clause {
    pub fn matches<R: MemberRecord + ?Sized>(&self, record: &R) -> bool {
        match self {
            Clause::UsernameEq(username) => record.username() == username.as_str(),
            Clause::TeamNameEq(team) => record.team_name() == Some(team.as_str()),
            Clause::AgeGoe(bound) => record.age() >= *bound,
            Clause::AgeLoe(bound) => record.age() <= *bound,
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::UsernameEq(username) => write!(f, "username = '{}'", username),
            Clause::TeamNameEq(team) => write!(f, "team.name = '{}'", team),
            Clause::AgeGoe(bound) => write!(f, "age >= {}", bound),
            Clause::AgeLoe(bound) => write!(f, "age <= {}", bound),
        }
    }
}

/// Conjunction of clauses. The empty conjunction matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    /// The identity predicate.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn and(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn is_identity(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn matches<R: MemberRecord + ?Sized>(&self, record: &R) -> bool {
        self.clauses.iter().all(|clause| clause.matches(record))
    }

    /// Keep the records of `records` this predicate matches, in order.
    pub fn filter<'a, R, I>(&'a self, records: I) -> impl Iterator<Item = I::Item> + 'a
    where
        R: MemberRecord + ?Sized + 'a,
        I: IntoIterator<Item = &'a R>,
        I::IntoIter: 'a,
    {
        records.into_iter().filter(move |r| self.matches(*r))
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.clauses.is_empty() {
            return write!(f, "TRUE");
        }
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}
