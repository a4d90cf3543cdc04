use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quizdeck")]
#[command(author, version, about)]
#[command(long_about = "A keyboard-driven quiz slide presenter.\n\n\
    Slides come from a JSON deck with `main_slides` and `special_slides`.\n\n\
    Keys while presenting:\n  \
    q                 Next slide\n  \
    Delete/Backspace  Previous slide\n  \
    a                 Show or hide the answer\n  \
    1-9               Show a special slide (plays the alarm)\n\n\
    Examples:\n  \
    quizdeck slides.json               Present in a window\n  \
    quizdeck slides.json --fullscreen  Present fullscreen\n  \
    quizdeck check slides.json         Validate a deck and its assets")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// JSON slide deck to present
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch fullscreen instead of in a window
    #[arg(long, global = false)]
    pub fullscreen: bool,

    /// Directory holding image and audio assets (defaults to the deck's directory)
    #[arg(long, global = false)]
    pub assets: Option<PathBuf>,

    /// Never play sound cues
    #[arg(long, global = false)]
    pub no_audio: bool,

    /// Show the first slide immediately instead of the splash screen
    #[arg(long, global = false)]
    pub start_visible: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a deck and report problems without presenting it
    Check {
        /// JSON slide deck to check
        file: PathBuf,

        /// Directory holding image and audio assets (defaults to the deck's directory)
        #[arg(long)]
        assets: Option<PathBuf>,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.theme, defaults.audio_policy, defaults.start_mode)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Check { file, assets }) => crate::commands::check::run(&file, assets),
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                println!("quizdeck {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
            None => {
                if let Some(file) = self.file {
                    crate::app::run(crate::app::LaunchOptions {
                        file,
                        assets: self.assets,
                        fullscreen: self.fullscreen,
                        audio: !self.no_audio,
                        start_visible: self.start_visible,
                    })
                } else {
                    use clap::CommandFactory;
                    let mut cmd = Self::command();
                    cmd.print_help()?;
                    println!();
                    Ok(())
                }
            }
        }
    }
}
