//! SeaORM implementation of MemberRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::member_condition::to_condition;
use crate::domain::{
    DomainError, Member, MemberRepository, MemberSearchCondition, MemberTeamDto, NewMember,
};
use crate::models::member::{ActiveModel, Column, Entity as MemberEntity};
use crate::models::team::Entity as TeamEntity;

/// SeaORM-based implementation of MemberRepository
pub struct SeaOrmMemberRepository {
    db: DatabaseConnection,
}

impl SeaOrmMemberRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MemberRepository for SeaOrmMemberRepository {
    async fn create(&self, member: NewMember) -> Result<Member, DomainError> {
        if member.username.trim().is_empty() {
            return Err(DomainError::Validation("Username is required".to_string()));
        }

        if let Some(team_id) = member.team_id
            && TeamEntity::find_by_id(team_id).one(&self.db).await?.is_none()
        {
            return Err(DomainError::team_not_found());
        }

        let new_member = ActiveModel {
            username: Set(member.username),
            age: Set(member.age),
            team_id: Set(member.team_id),
            ..Default::default()
        };

        let result = new_member.insert(&self.db).await?;
        Ok(Member::from(result))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Member>, DomainError> {
        let member = MemberEntity::find_by_id(id).one(&self.db).await?;
        Ok(member.map(Member::from))
    }

    async fn find_all(&self) -> Result<Vec<Member>, DomainError> {
        let members = MemberEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(members.into_iter().map(Member::from).collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(MemberEntity::find().count(&self.db).await?)
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = MemberEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::member_not_found());
        }

        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Vec<Member>, DomainError> {
        let members = MemberEntity::find()
            .filter(Column::Username.eq(username))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(members.into_iter().map(Member::from).collect())
    }

    async fn find_by_username_and_age_greater_than(
        &self,
        username: &str,
        age: i32,
    ) -> Result<Vec<Member>, DomainError> {
        let members = MemberEntity::find()
            .filter(Column::Username.eq(username))
            .filter(Column::Age.gt(age))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(members.into_iter().map(Member::from).collect())
    }

    async fn find_user(&self, username: &str, age: i32) -> Result<Vec<Member>, DomainError> {
        let members = MemberEntity::find()
            .filter(Column::Username.eq(username))
            .filter(Column::Age.eq(age))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(members.into_iter().map(Member::from).collect())
    }

    async fn find_by_names(&self, names: &[String]) -> Result<Vec<Member>, DomainError> {
        // `IN ()` is not valid SQL
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let members = MemberEntity::find()
            .filter(Column::Username.is_in(names.iter().map(String::as_str)))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(members.into_iter().map(Member::from).collect())
    }

    async fn find_username_list(&self) -> Result<Vec<String>, DomainError> {
        let usernames = MemberEntity::find()
            .select_only()
            .column(Column::Username)
            .order_by_asc(Column::Id)
            .into_tuple::<String>()
            .all(&self.db)
            .await?;

        Ok(usernames)
    }

    async fn bulk_age_plus(&self, age: i32) -> Result<u64, DomainError> {
        let result = MemberEntity::update_many()
            .col_expr(Column::Age, Expr::col(Column::Age).add(1))
            .filter(Column::Age.gte(age))
            .exec(&self.db)
            .await?;

        tracing::debug!(
            "Bulk age increment for age >= {}: {} rows",
            age,
            result.rows_affected
        );

        Ok(result.rows_affected)
    }

    async fn search(
        &self,
        condition: &MemberSearchCondition,
    ) -> Result<Vec<MemberTeamDto>, DomainError> {
        let predicate = condition.compose();
        tracing::debug!("Member search - where: {}", predicate);

        let mut query = MemberEntity::find().find_also_related(TeamEntity);
        if let Some(filter) = to_condition(&predicate) {
            query = query.filter(filter);
        }

        let rows = query.order_by_asc(Column::Id).all(&self.db).await?;

        Ok(rows
            .into_iter()
            .map(|(member, team)| MemberTeamDto {
                member_id: member.id,
                username: member.username,
                age: member.age,
                team_id: member.team_id,
                team_name: team.map(|t| t.name),
            })
            .collect())
    }
}
