use sea_orm::DatabaseConnection;

use crate::util::lock::ChampionshipLocks;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub locks: ChampionshipLocks,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            locks: ChampionshipLocks::new(),
        }
    }
}
