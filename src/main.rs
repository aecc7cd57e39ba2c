use anyhow::Context;
use opengl_game::{
    logging::{init_logging, LoggingConfig},
    EngineConfig, GameEngine,
};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut engine = GameEngine::new(EngineConfig::default())?;
    engine
        .initialise()
        .context("failed to initialise game engine")?;
    engine.run()?;
    Ok(())
}
