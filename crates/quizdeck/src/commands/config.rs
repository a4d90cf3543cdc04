use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set(&key, &value)?;
            let path = config.save()?;
            println!(
                "{} {} = {} ({})",
                "Saved".green().bold(),
                key,
                value,
                path.display()
            );
            Ok(())
        }
    }
}

fn show() -> anyhow::Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();
    let jump = config.jump_policy();

    println!("{} {}", "Config file:".bold(), path.display());
    println!();
    println!("  {:<28} {}", "defaults.theme", config.theme_name());
    println!(
        "  {:<28} {}",
        "defaults.audio_policy",
        config.audio_policy().name()
    );
    println!(
        "  {:<28} {}",
        "defaults.invalid_jump_alarm", jump.alarm_on_invalid
    );
    println!("  {:<28} {}", "defaults.alarm_cue", jump.alarm_cue);
    println!("  {:<28} {}", "defaults.start_mode", config.start_mode().name());
    if !path.exists() {
        println!();
        println!(
            "{}",
            "No config file yet; showing defaults. Use `quizdeck config set` to create one.".dimmed()
        );
    }
    Ok(())
}
