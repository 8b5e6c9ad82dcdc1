//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::DomainError;
use super::search::{MemberRecord, MemberSearchCondition};

/// Team data for API responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub id: i32,
    pub name: String,
}

/// Member data for API responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    pub id: i32,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i32>,
}

/// Input for creating a member
#[derive(Debug, Clone, Deserialize)]
pub struct NewMember {
    pub username: String,
    #[serde(default)]
    pub age: i32,
    pub team_id: Option<i32>,
}

/// Member joined with its team, as returned by searches
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberTeamDto {
    pub member_id: i32,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
}

impl MemberRecord for MemberTeamDto {
    fn username(&self) -> &str {
        &self.username
    }

    fn age(&self) -> i32 {
        self.age
    }

    fn team_name(&self) -> Option<&str> {
        self.team_name.as_deref()
    }
}

/// Repository trait for Team entity
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Create a new team
    async fn create(&self, name: String) -> Result<Team, DomainError>;

    /// Find a team by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DomainError>;

    /// Find all teams
    async fn find_all(&self) -> Result<Vec<Team>, DomainError>;
}

/// Repository trait for Member entity
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Create a new member, optionally attached to an existing team
    async fn create(&self, member: NewMember) -> Result<Member, DomainError>;

    /// Find a member by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Member>, DomainError>;

    /// Find all members
    async fn find_all(&self) -> Result<Vec<Member>, DomainError>;

    /// Count all members
    async fn count(&self) -> Result<u64, DomainError>;

    /// Delete a member by ID
    async fn delete(&self, id: i32) -> Result<(), DomainError>;

    /// Find members with exactly this username
    async fn find_by_username(&self, username: &str) -> Result<Vec<Member>, DomainError>;

    /// Find members with this username and an age strictly above `age`
    async fn find_by_username_and_age_greater_than(
        &self,
        username: &str,
        age: i32,
    ) -> Result<Vec<Member>, DomainError>;

    /// Find members with this username and exactly this age
    async fn find_user(&self, username: &str, age: i32) -> Result<Vec<Member>, DomainError>;

    /// Find members whose username is one of `names`
    async fn find_by_names(&self, names: &[String]) -> Result<Vec<Member>, DomainError>;

    /// All usernames, in insertion order
    async fn find_username_list(&self) -> Result<Vec<String>, DomainError>;

    /// Add one year to every member aged `age` or older; returns the number of rows changed
    async fn bulk_age_plus(&self, age: i32) -> Result<u64, DomainError>;

    /// Find members (with their team) matching every present filter of `condition`
    async fn search(
        &self,
        condition: &MemberSearchCondition,
    ) -> Result<Vec<MemberTeamDto>, DomainError>;
}
