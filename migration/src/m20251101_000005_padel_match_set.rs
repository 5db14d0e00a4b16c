use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000004_padel_match::PadelMatch;

static IDX_MATCH_SET_MATCH_ID: &str = "idx-padel_match_set-match_id";
static FK_MATCH_SET_MATCH_ID: &str = "fk-padel_match_set-match_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PadelMatchSet::Table)
                    .if_not_exists()
                    .col(pk_auto(PadelMatchSet::Id))
                    .col(integer(PadelMatchSet::MatchId))
                    .col(integer(PadelMatchSet::SetNumber))
                    .col(integer(PadelMatchSet::Team1Games))
                    .col(integer(PadelMatchSet::Team2Games))
                    .col(timestamp(PadelMatchSet::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MATCH_SET_MATCH_ID)
                    .table(PadelMatchSet::Table)
                    .col(PadelMatchSet::MatchId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MATCH_SET_MATCH_ID)
                    .from_tbl(PadelMatchSet::Table)
                    .from_col(PadelMatchSet::MatchId)
                    .to_tbl(PadelMatch::Table)
                    .to_col(PadelMatch::Id)
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
                    .name(FK_MATCH_SET_MATCH_ID)
                    .table(PadelMatchSet::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MATCH_SET_MATCH_ID)
                    .table(PadelMatchSet::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PadelMatchSet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PadelMatchSet {
    Table,
    Id,
    MatchId,
    SetNumber,
    Team1Games,
    Team2Games,
    CreatedAt,
}
