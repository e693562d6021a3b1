use tienlen::{BasicStrategy, Game, GameConfig, GameError, Strategy};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tienlen=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GameConfig::from_env();
    info!(
        turn_limit = config.turn_limit,
        seed = ?config.seed,
        double_run_over_quad = config.rules.double_run_over_quad,
        "Starting Tien Len self-play"
    );

    if let Err(err) = play(config) {
        error!(error = %err, "Game ended abnormally");
        std::process::exit(1);
    }
}

fn play(config: GameConfig) -> Result<(), GameError> {
    let names: Vec<String> = (1..=4).map(|seat| format!("Bot {seat}")).collect();
    let rules = config.rules;
    let mut game = Game::new_game(&names, config)?;

    let strategies: Vec<Box<dyn Strategy>> = (0..names.len())
        .map(|_| Box::new(BasicStrategy::with_rules(rules)) as Box<dyn Strategy>)
        .collect();

    let winner = game.run(&strategies)?;
    info!(
        winner,
        name = %game.players()[winner].name,
        turns = game.turns(),
        "Game over"
    );

    match serde_json::to_string_pretty(&game.snapshot()) {
        Ok(summary) => println!("{summary}"),
        Err(err) => error!(error = %err, "Failed to serialize final snapshot"),
    }

    Ok(())
}
