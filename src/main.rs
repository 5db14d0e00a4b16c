use padel_league::{
    config::Config, model::app::AppState, service::championship::ChampionshipService,
    service::standings::StandingsService, startup,
};

/// Rebuilds the standings of every championship from its finished matches.
#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    startup::init_tracing();

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };
    let state = AppState::from(db);

    let championship_ids = match ChampionshipService::new(&state.db).get_all_ids().await {
        Ok(ids) => ids,
        Err(e) => {
            tracing::error!("Failed to list championships: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Rebuilding standings of {} championships", championship_ids.len());

    let standings_service = StandingsService::new(&state.db, &state.locks);
    let mut failed = 0;
    for championship_id in championship_ids {
        // Failures are logged by the service; keep going with the other championships
        if standings_service
            .calculate_standings(championship_id)
            .await
            .is_err()
        {
            failed += 1;
        }
    }

    if failed > 0 {
        tracing::error!("Standings rebuild failed for {} championships", failed);
        std::process::exit(1);
    }

    tracing::info!("Standings rebuild complete");
}
