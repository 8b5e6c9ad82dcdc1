//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{MemberRepository, TeamRepository};
use crate::infrastructure::{SeaOrmMemberRepository, SeaOrmTeamRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    /// Member repository
    pub member_repo: Arc<dyn MemberRepository>,
    /// Team repository
    pub team_repo: Arc<dyn TeamRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let member_repo = Arc::new(SeaOrmMemberRepository::new(db.clone()));
        let team_repo = Arc::new(SeaOrmTeamRepository::new(db.clone()));

        Self {
            db,
            member_repo,
            team_repo,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
