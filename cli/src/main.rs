use std::io;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use session::Session;

mod command;
mod session;

/// Minesweeper in the terminal, on a 10x10 board with 10 mines.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn level_filter(level: log::LevelFilter) -> LevelFilter {
    match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // `log` records from the engine are forwarded into the subscriber
    tracing_subscriber::fmt()
        .with_max_level(level_filter(args.verbose.log_level_filter()))
        .with_writer(io::stderr)
        .init();
    log::debug!("seed: {:?}", args.seed);

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), args.seed);
    session.run().context("Terminal session failed")?;

    log::debug!("Bye");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse() {
        let args = Args::try_parse_from(["miner", "-s", "42", "-v"]).unwrap();

        assert_eq!(args.seed, Some(42));
        assert_eq!(args.verbose.log_level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn quiet_turns_logging_off() {
        let args = Args::try_parse_from(["miner", "-q"]).unwrap();

        assert_eq!(level_filter(args.verbose.log_level_filter()), LevelFilter::OFF);
    }
}
