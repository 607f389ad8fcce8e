mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nutriscore={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Score {
            input,
            profile,
            json,
            csv,
        } => nutriscore::score::run(
            &input,
            &profile.category,
            profile.profiles.as_deref(),
            json,
            csv.as_deref(),
        ),
        Commands::One {
            profile,
            product,
            json,
        } => nutriscore::score::run_one(
            product.into_record(),
            &profile.category,
            profile.profiles.as_deref(),
            json,
        )
        .map(|_| ()),
        Commands::Tables { profile, toml } => nutriscore::score::run_tables(
            &profile.category,
            profile.profiles.as_deref(),
            toml,
        ),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
