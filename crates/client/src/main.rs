//! Console client entry point.
use std::io;

use anyhow::Result;
use cavern_client::{CliConfig, Game, Prompter, setup_logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _guard = setup_logging(config.session_id.as_deref())?;

    let (roster, combat) = config.load_content()?;
    let prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());

    Game::new(prompter, roster, combat, config.seed()).run()
}
