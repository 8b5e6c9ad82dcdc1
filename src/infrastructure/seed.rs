use sea_orm::*;

use crate::models::{member, team};

/// Two teams with two members each: ages 10 and 20 in `teamA`, 30 and 40 in `teamB`.
///
/// Does nothing when the database already holds teams or members, so a file
/// database started repeatedly with `SEED_DEMO` is seeded once.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    let teams = team::Entity::find().count(db).await?;
    let members = member::Entity::find().count(db).await?;
    if teams > 0 || members > 0 {
        tracing::info!(
            "Skipping demo seed: database already has {} teams and {} members",
            teams,
            members
        );
        return Ok(());
    }

    let mut team_ids = Vec::new();
    for name in ["teamA", "teamB"] {
        let team = team::ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        };
        let res = team::Entity::insert(team).exec(db).await?;
        team_ids.push(res.last_insert_id);
    }

    let members = [
        ("member1", 10, team_ids[0]),
        ("member2", 20, team_ids[0]),
        ("member3", 30, team_ids[1]),
        ("member4", 40, team_ids[1]),
    ];

    for (username, age, team_id) in members {
        let member = member::ActiveModel {
            username: Set(username.to_owned()),
            age: Set(age),
            team_id: Set(Some(team_id)),
            ..Default::default()
        };
        member::Entity::insert(member).exec(db).await?;
    }

    tracing::debug!("Seeded {} teams and {} members", team_ids.len(), members.len());

    Ok(())
}
