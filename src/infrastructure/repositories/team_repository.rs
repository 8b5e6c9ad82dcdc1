//! SeaORM implementation of TeamRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::{DomainError, Team, TeamRepository};
use crate::models::team::{ActiveModel, Column, Entity as TeamEntity};

/// SeaORM-based implementation of TeamRepository
pub struct SeaOrmTeamRepository {
    db: DatabaseConnection,
}

impl SeaOrmTeamRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TeamRepository for SeaOrmTeamRepository {
    async fn create(&self, name: String) -> Result<Team, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation("Team name is required".to_string()));
        }

        let team = ActiveModel {
            name: Set(name),
            ..Default::default()
        };

        let result = team.insert(&self.db).await?;
        Ok(Team::from(result))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DomainError> {
        let team = TeamEntity::find_by_id(id).one(&self.db).await?;
        Ok(team.map(Team::from))
    }

    async fn find_all(&self) -> Result<Vec<Team>, DomainError> {
        let teams = TeamEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(teams.into_iter().map(Team::from).collect())
    }
}
