use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PadelCourt::Table)
                    .if_not_exists()
                    .col(pk_auto(PadelCourt::Id))
                    .col(string(PadelCourt::Name))
                    .col(boolean(PadelCourt::IsActive).default(true))
                    .col(timestamp(PadelCourt::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PadelCourt::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PadelCourt {
    Table,
    Id,
    Name,
    IsActive,
    CreatedAt,
}
