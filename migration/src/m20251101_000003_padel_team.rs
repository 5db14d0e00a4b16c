use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_padel_championship::PadelChampionship;

static IDX_TEAM_CHAMPIONSHIP_ID: &str = "idx-padel_team-championship_id";
static FK_TEAM_CHAMPIONSHIP_ID: &str = "fk-padel_team-championship_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PadelTeam::Table)
                    .if_not_exists()
                    .col(pk_auto(PadelTeam::Id))
                    .col(string(PadelTeam::Name))
                    .col(string(PadelTeam::Player1Name))
                    .col(string(PadelTeam::Player2Name))
                    .col(integer(PadelTeam::ChampionshipId))
                    .col(integer(PadelTeam::GroupNumber).default(1))
                    .col(timestamp(PadelTeam::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_CHAMPIONSHIP_ID)
                    .table(PadelTeam::Table)
                    .col(PadelTeam::ChampionshipId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_CHAMPIONSHIP_ID)
                    .from_tbl(PadelTeam::Table)
                    .from_col(PadelTeam::ChampionshipId)
                    .to_tbl(PadelChampionship::Table)
                    .to_col(PadelChampionship::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEAM_CHAMPIONSHIP_ID)
                    .table(PadelTeam::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_CHAMPIONSHIP_ID)
                    .table(PadelTeam::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PadelTeam::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PadelTeam {
    Table,
    Id,
    Name,
    Player1Name,
    Player2Name,
    ChampionshipId,
    GroupNumber,
    CreatedAt,
}
