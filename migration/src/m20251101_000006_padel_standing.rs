use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_padel_championship::PadelChampionship,
    m20251101_000003_padel_team::PadelTeam,
};

static IDX_STANDING_CHAMPIONSHIP_TEAM: &str = "idx-padel_standing-championship_id-team_id";
static IDX_STANDING_POSITION: &str = "idx-padel_standing-championship_id-position";
static FK_STANDING_CHAMPIONSHIP_ID: &str = "fk-padel_standing-championship_id";
static FK_STANDING_TEAM_ID: &str = "fk-padel_standing-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PadelStanding::Table)
                    .if_not_exists()
                    .col(pk_auto(PadelStanding::Id))
                    .col(integer(PadelStanding::ChampionshipId))
                    .col(integer(PadelStanding::TeamId))
                    .col(integer(PadelStanding::GroupNumber).default(1))
                    .col(integer(PadelStanding::Points).default(0))
                    .col(integer(PadelStanding::MatchesPlayed).default(0))
                    .col(integer(PadelStanding::MatchesWon).default(0))
                    .col(integer(PadelStanding::MatchesLost).default(0))
                    .col(integer(PadelStanding::SetsWon).default(0))
                    .col(integer(PadelStanding::SetsLost).default(0))
                    .col(integer(PadelStanding::GamesWon).default(0))
                    .col(integer(PadelStanding::GamesLost).default(0))
                    .col(integer(PadelStanding::Position).default(0))
                    .col(timestamp(PadelStanding::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STANDING_CHAMPIONSHIP_TEAM)
                    .table(PadelStanding::Table)
                    .col(PadelStanding::ChampionshipId)
                    .col(PadelStanding::TeamId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STANDING_POSITION)
                    .table(PadelStanding::Table)
                    .col(PadelStanding::ChampionshipId)
                    .col(PadelStanding::Position)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STANDING_CHAMPIONSHIP_ID)
                    .from_tbl(PadelStanding::Table)
                    .from_col(PadelStanding::ChampionshipId)
                    .to_tbl(PadelChampionship::Table)
                    .to_col(PadelChampionship::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STANDING_TEAM_ID)
                    .from_tbl(PadelStanding::Table)
                    .from_col(PadelStanding::TeamId)
                    .to_tbl(PadelTeam::Table)
                    .to_col(PadelTeam::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [FK_STANDING_TEAM_ID, FK_STANDING_CHAMPIONSHIP_ID] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(PadelStanding::Table)
                        .to_owned(),
                )
                .await?;
        }

        for idx in [IDX_STANDING_POSITION, IDX_STANDING_CHAMPIONSHIP_TEAM] {
            manager
                .drop_index(
                    Index::drop()
                        .name(idx)
                        .table(PadelStanding::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(PadelStanding::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PadelStanding {
    Table,
    Id,
    ChampionshipId,
    TeamId,
    GroupNumber,
    Points,
    MatchesPlayed,
    MatchesWon,
    MatchesLost,
    SetsWon,
    SetsLost,
    GamesWon,
    GamesLost,
    Position,
    UpdatedAt,
}
