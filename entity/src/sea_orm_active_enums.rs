//! String-backed enums shared by the padel entities.

use sea_orm::entity::prelude::*;

/// Competition format of a championship. Only `Americano` changes tie-break ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum ChampionshipFormat {
    #[sea_orm(string_value = "liga")]
    Liga,
    #[sea_orm(string_value = "torneo")]
    Torneo,
    #[sea_orm(string_value = "americano")]
    Americano,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum ChampionshipStatus {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "finished")]
    Finished,
}

/// Lifecycle of a match: `Pending` → `Playing` → `Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum MatchStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "playing")]
    Playing,
    #[sea_orm(string_value = "finished")]
    Finished,
}
