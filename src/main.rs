use anyhow::{bail, Result};

use easyrider_validator::cli;
use easyrider_validator::config::Config;

fn main() -> Result<()> {
    // Parse configuration from command line and config files
    let config = Config::from_args_and_env()?;

    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .init();

    let input = cli::open_input(config.input.as_deref())?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let stderr = std::io::stderr();
    let mut errors = stderr.lock();

    let failed = cli::run(&config, input, &mut out, &mut errors)?;
    if failed > 0 {
        bail!("{} of {} checks could not run", failed, config.checks.len());
    }

    Ok(())
}
