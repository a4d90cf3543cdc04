mod app;
mod assets;
mod audio;
mod cli;
mod commands;
mod config;
mod deck;
mod input;
mod render;
mod state;
mod theme;
mod view;

use clap::Parser;
use colored::Colorize;

fn main() {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut logger = env_logger::Builder::new();
    logger
        .filter_level(cli.log_level())
        .format_timestamp(None)
        .parse_default_env();
    if cli.no_color {
        logger.write_style(env_logger::WriteStyle::Never);
    }
    logger.init();

    if let Err(e) = cli.run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
