//! Repository implementations using SeaORM

pub mod member_condition;
pub mod member_repository;
pub mod team_repository;

pub use member_condition::to_condition;
pub use member_repository::SeaOrmMemberRepository;
pub use team_repository::SeaOrmTeamRepository;
