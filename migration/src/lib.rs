pub use sea_orm_migration::prelude::*;

mod m20251101_000001_padel_championship;
mod m20251101_000002_padel_court;
mod m20251101_000003_padel_team;
mod m20251101_000004_padel_match;
mod m20251101_000005_padel_match_set;
mod m20251101_000006_padel_standing;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_padel_championship::Migration),
            Box::new(m20251101_000002_padel_court::Migration),
            Box::new(m20251101_000003_padel_team::Migration),
            Box::new(m20251101_000004_padel_match::Migration),
            Box::new(m20251101_000005_padel_match_set::Migration),
            Box::new(m20251101_000006_padel_standing::Migration),
        ]
    }
}
