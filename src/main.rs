mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod source;

use clap::Parser;
use log::LevelFilter;

use cli::{Cli, Commands};
use config::Config;

fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    // RUST_LOG, when set, wins over --debug
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = Config::load();
    let cli = cli.with_config(&config);

    let result = match cli.command.unwrap_or_default() {
        Commands::Ports => app::handle_ports(),
        Commands::Run => cli.run_settings().and_then(|settings| app::handle_run(&settings)),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
