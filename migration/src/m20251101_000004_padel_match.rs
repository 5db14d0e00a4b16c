use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_padel_championship::PadelChampionship,
    m20251101_000002_padel_court::PadelCourt, m20251101_000003_padel_team::PadelTeam,
};

static IDX_MATCH_CHAMPIONSHIP_ID: &str = "idx-padel_match-championship_id";
static IDX_MATCH_TEAMS: &str = "idx-padel_match-team1_id-team2_id";
static FK_MATCH_CHAMPIONSHIP_ID: &str = "fk-padel_match-championship_id";
static FK_MATCH_COURT_ID: &str = "fk-padel_match-court_id";
static FK_MATCH_TEAM1_ID: &str = "fk-padel_match-team1_id";
static FK_MATCH_TEAM2_ID: &str = "fk-padel_match-team2_id";
static FK_MATCH_WINNER_ID: &str = "fk-padel_match-winner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PadelMatch::Table)
                    .if_not_exists()
                    .col(pk_auto(PadelMatch::Id))
                    .col(integer(PadelMatch::ChampionshipId))
                    .col(integer(PadelMatch::Team1Id))
                    .col(integer(PadelMatch::Team2Id))
                    .col(integer_null(PadelMatch::CourtId))
                    .col(integer(PadelMatch::Round))
                    .col(integer(PadelMatch::GroupNumber).default(1))
                    .col(timestamp_null(PadelMatch::ScheduledDate))
                    .col(string_len(PadelMatch::Status, 20).default("pending"))
                    .col(integer(PadelMatch::Team1Sets).default(0))
                    .col(integer(PadelMatch::Team2Sets).default(0))
                    .col(integer(PadelMatch::Team1Games).default(0))
                    .col(integer(PadelMatch::Team2Games).default(0))
                    .col(integer_null(PadelMatch::WinnerId))
                    .col(timestamp(PadelMatch::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MATCH_CHAMPIONSHIP_ID)
                    .table(PadelMatch::Table)
                    .col(PadelMatch::ChampionshipId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MATCH_TEAMS)
                    .table(PadelMatch::Table)
                    .col(PadelMatch::Team1Id)
                    .col(PadelMatch::Team2Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MATCH_CHAMPIONSHIP_ID)
                    .from_tbl(PadelMatch::Table)
                    .from_col(PadelMatch::ChampionshipId)
                    .to_tbl(PadelChampionship::Table)
                    .to_col(PadelChampionship::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MATCH_COURT_ID)
                    .from_tbl(PadelMatch::Table)
                    .from_col(PadelMatch::CourtId)
                    .to_tbl(PadelCourt::Table)
                    .to_col(PadelCourt::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MATCH_TEAM1_ID)
                    .from_tbl(PadelMatch::Table)
                    .from_col(PadelMatch::Team1Id)
                    .to_tbl(PadelTeam::Table)
                    .to_col(PadelTeam::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MATCH_TEAM2_ID)
                    .from_tbl(PadelMatch::Table)
                    .from_col(PadelMatch::Team2Id)
                    .to_tbl(PadelTeam::Table)
                    .to_col(PadelTeam::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MATCH_WINNER_ID)
                    .from_tbl(PadelMatch::Table)
                    .from_col(PadelMatch::WinnerId)
                    .to_tbl(PadelTeam::Table)
                    .to_col(PadelTeam::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_MATCH_WINNER_ID,
            FK_MATCH_TEAM2_ID,
            FK_MATCH_TEAM1_ID,
            FK_MATCH_COURT_ID,
            FK_MATCH_CHAMPIONSHIP_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(PadelMatch::Table)
                        .to_owned(),
                )
                .await?;
        }

        for idx in [IDX_MATCH_TEAMS, IDX_MATCH_CHAMPIONSHIP_ID] {
            manager
                .drop_index(Index::drop().name(idx).table(PadelMatch::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(PadelMatch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PadelMatch {
    Table,
    Id,
    ChampionshipId,
    Team1Id,
    Team2Id,
    CourtId,
    Round,
    GroupNumber,
    ScheduledDate,
    Status,
    Team1Sets,
    Team2Sets,
    Team1Games,
    Team2Games,
    WinnerId,
    CreatedAt,
}
