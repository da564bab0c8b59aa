use anyhow::Result;
use std::io::{self, BufWriter};

use gcode_details::config::{Config, usage};
use gcode_details::runner::{RunOutcome, run};

fn main() -> Result<()> {
    let config = match Config::from_args_and_env() {
        Ok(config) => config,
        Err(e) => {
            // No --log-level without valid arguments; only RUST_LOG applies.
            env_logger::init();
            log::debug!("invalid arguments: {}", e);
            print!("{}", usage());
            std::process::exit(1);
        }
    };

    let env = env_logger::Env::default().default_filter_or(&config.log_level);
    env_logger::Builder::from_env(env).init();
    log::debug!("config: {:?}", config);

    let mut out = BufWriter::new(io::stdout().lock());
    let outcome = run(&config, &mut out, &mut io::stderr().lock())?;
    // A read failure was already reported on stderr and keeps exit status 0.
    if let RunOutcome::Completed { lines } = outcome {
        log::info!("described {} lines from {:?}", lines, config.input);
    }

    Ok(())
}
