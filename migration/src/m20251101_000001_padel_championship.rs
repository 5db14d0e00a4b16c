use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PadelChampionship::Table)
                    .if_not_exists()
                    .col(pk_auto(PadelChampionship::Id))
                    .col(string(PadelChampionship::Name))
                    .col(string_len(PadelChampionship::Format, 20))
                    .col(date(PadelChampionship::StartDate))
                    .col(date_null(PadelChampionship::EndDate))
                    .col(integer(PadelChampionship::NumGroups).default(1))
                    .col(integer(PadelChampionship::PointsWin).default(3))
                    .col(integer(PadelChampionship::PointsLoss).default(0))
                    .col(string_len(PadelChampionship::Status, 20).default("draft"))
                    .col(timestamp(PadelChampionship::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PadelChampionship::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PadelChampionship {
    Table,
    Id,
    Name,
    Format,
    StartDate,
    EndDate,
    NumGroups,
    PointsWin,
    PointsLoss,
    Status,
    CreatedAt,
}
