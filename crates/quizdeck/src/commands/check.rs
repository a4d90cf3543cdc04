use std::path::{Path, PathBuf};

use anyhow::Context;
use colored::Colorize;

use crate::assets::AssetResolver;
use crate::config::Config;
use crate::deck::SlideDeck;

/// Asset names that did not resolve, split by kind.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MissingAssets {
    pub images: Vec<String>,
    pub sounds: Vec<String>,
}

impl MissingAssets {
    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.sounds.is_empty()
    }
}

pub fn missing_assets(deck: &SlideDeck, assets: &AssetResolver, alarm_cue: &str) -> MissingAssets {
    let (images, mut sounds) = deck.asset_names();
    if !deck.special.is_empty() && !sounds.contains(&alarm_cue) {
        sounds.push(alarm_cue);
    }
    MissingAssets {
        images: images
            .into_iter()
            .filter(|name| assets.resolve_image(name).is_none())
            .map(str::to_string)
            .collect(),
        sounds: sounds
            .into_iter()
            .filter(|name| assets.resolve_audio(name).is_none())
            .map(str::to_string)
            .collect(),
    }
}

pub fn run(file: &Path, assets: Option<PathBuf>) -> anyhow::Result<()> {
    let deck = SlideDeck::load(file).with_context(|| format!("Cannot present {}", file.display()))?;
    let base = assets.unwrap_or_else(|| deck_dir(file));
    let resolver = AssetResolver::new(base);
    let alarm = Config::load_or_default().jump_policy().alarm_cue;

    println!(
        "{} {} main, {} special slides",
        "OK".green().bold(),
        deck.main.len(),
        deck.special.len()
    );
    if deck.is_empty() {
        println!("{} the deck has no main slides", "warning:".yellow().bold());
    }
    if deck.special.len() > 9 {
        println!(
            "{} only special slides 1-9 are reachable from the keyboard",
            "warning:".yellow().bold()
        );
    }

    let missing = missing_assets(&deck, &resolver, &alarm);
    for name in &missing.images {
        println!("{} image {name:?} not found", "missing:".red().bold());
    }
    for name in &missing.sounds {
        println!("{} audio {name:?} not found", "missing:".red().bold());
    }
    if missing.is_empty() {
        println!(
            "All assets resolved in {}",
            resolver.base_path().display()
        );
    }
    Ok(())
}

pub fn deck_dir(file: &Path) -> PathBuf {
    file.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
        .to_path_buf()
}
