use jcalendars::application::{Cli, Config, init_logging};
use log::debug;

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    let _logger = init_logging(&config.log_level)?;
    debug!("Loaded {:?}", config);

    Cli::run(&config)
}
