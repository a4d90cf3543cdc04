use std::cell::RefCell;
use std::fs::File;
use std::io::BufReader;

use anyhow::Context;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::assets::AssetResolver;

/// Plays a named sound without waiting for it. Failures are the player's
/// problem; callers never observe them.
pub trait CuePlayer {
    fn play(&self, name: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioPolicy {
    /// A new cue plays on top of whatever is still sounding.
    #[default]
    Overlap,
    /// A new cue stops the previous one first.
    Restart,
}

impl AudioPolicy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "overlap" => Some(Self::Overlap),
            "restart" => Some(Self::Restart),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Overlap => "overlap",
            Self::Restart => "restart",
        }
    }
}

/// Used with `--no-audio` or when no output device is available.
pub struct SilentPlayer;

impl CuePlayer for SilentPlayer {
    fn play(&self, name: &str) {
        log::debug!("cue {name} (audio disabled)");
    }
}

pub struct RodioPlayer {
    // Dropping the stream silences every sink, so it lives as long as the player.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    assets: AssetResolver,
    policy: AudioPolicy,
    current: RefCell<Option<Sink>>,
}

impl RodioPlayer {
    pub fn new(assets: AssetResolver, policy: AudioPolicy) -> anyhow::Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("No audio output device available")?;
        Ok(Self {
            _stream: stream,
            handle,
            assets,
            policy,
            current: RefCell::new(None),
        })
    }

    fn try_play(&self, name: &str) -> anyhow::Result<()> {
        let path = self.assets.resolve_audio(name).with_context(|| {
            format!(
                "Audio asset {name:?} not found in {}",
                self.assets.base_path().display()
            )
        })?;
        let file = File::open(&path).with_context(|| format!("Failed to open {}", path.display()))?;
        let source = Decoder::new(BufReader::new(file))
            .with_context(|| format!("Failed to decode {}", path.display()))?;
        let sink = Sink::try_new(&self.handle)?;
        sink.append(source);

        match self.policy {
            AudioPolicy::Overlap => sink.detach(),
            AudioPolicy::Restart => {
                if let Some(previous) = self.current.replace(Some(sink)) {
                    previous.stop();
                }
            }
        }
        log::debug!("playing {}", path.display());
        Ok(())
    }
}

impl CuePlayer for RodioPlayer {
    fn play(&self, name: &str) {
        if let Err(e) = self.try_play(name) {
            log::warn!("Skipping cue {name}: {e:#}");
        }
    }
}

/// Open the default device, falling back to silence when there is none.
pub fn open_player(enabled: bool, assets: AssetResolver, policy: AudioPolicy) -> Box<dyn CuePlayer> {
    if !enabled {
        return Box::new(SilentPlayer);
    }
    match RodioPlayer::new(assets, policy) {
        Ok(player) => Box::new(player),
        Err(e) => {
            log::warn!("{e:#}, continuing without sound");
            Box::new(SilentPlayer)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_names() {
        assert_eq!(AudioPolicy::from_name("overlap"), Some(AudioPolicy::Overlap));
        assert_eq!(AudioPolicy::from_name("restart"), Some(AudioPolicy::Restart));
        assert_eq!(AudioPolicy::from_name("queue"), None);
        assert_eq!(AudioPolicy::default(), AudioPolicy::Overlap);
    }

    #[test]
    fn test_disabled_player_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let player = open_player(
            false,
            AssetResolver::new(dir.path().to_path_buf()),
            AudioPolicy::Overlap,
        );
        // never touches the device
        player.play("Alarm");
    }
}
