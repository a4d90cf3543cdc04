use eframe::egui;
use std::path::PathBuf;

use crate::assets::AssetResolver;
use crate::audio::{self, CuePlayer};
use crate::commands::check::deck_dir;
use crate::config::Config;
use crate::deck::SlideDeck;
use crate::input::{self, InputRouter, KeyPress};
use crate::render::{self, image_cache::ImageCache};
use crate::state::{Cue, PresentationState, StartMode};
use crate::theme::Theme;
use crate::view::{self, View};

pub struct LaunchOptions {
    pub file: PathBuf,
    pub assets: Option<PathBuf>,
    pub fullscreen: bool,
    pub audio: bool,
    pub start_visible: bool,
}

/// Key handling and view derivation, independent of the window.
struct Presenter {
    deck: Result<SlideDeck, String>,
    state: PresentationState,
    router: InputRouter,
    player: Box<dyn CuePlayer>,
}

impl Presenter {
    fn press(&mut self, key: KeyPress) {
        // nothing to navigate when the deck failed to load
        let Ok(deck) = &self.deck else { return };
        if let Some(Cue(name)) = self.router.handle(key, &mut self.state, deck) {
            self.player.play(&name);
        }
    }

    fn view(&self) -> View<'_> {
        match &self.deck {
            Ok(deck) => view::derive(&self.state, deck),
            Err(reason) => View::Unavailable {
                reason: reason.as_str(),
            },
        }
    }
}

struct PresentationApp {
    presenter: Presenter,
    theme: Theme,
    images: ImageCache,
}

impl eframe::App for PresentationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let keys = ctx.input(input::key_presses);
        for key in keys {
            self.presenter.press(key);
        }

        let bg = self.theme.background;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);
                let view = self.presenter.view();
                render::render_view(ui, &view, &self.theme, rect, &self.images);
            });
    }
}

pub fn run(options: LaunchOptions) -> anyhow::Result<()> {
    let LaunchOptions {
        file,
        assets,
        fullscreen,
        audio,
        start_visible,
    } = options;

    let deck = SlideDeck::load(&file).map_err(|e| {
        log::error!("{e}");
        e.to_string()
    });
    if let Ok(deck) = &deck {
        if deck.is_empty() {
            log::warn!("No main slides found in {}", file.display());
        }
    }

    let config = Config::load_or_default();
    let theme = Theme::from_name(&config.theme_name());
    log::debug!("theme {}", theme.name);
    let start = if start_visible {
        StartMode::FirstSlide
    } else {
        config.start_mode()
    };
    let router = InputRouter::new(config.jump_policy());
    let audio_policy = config.audio_policy();
    let resolver = AssetResolver::new(assets.unwrap_or_else(|| deck_dir(&file)));

    let title = format!(
        "quizdeck \u{2014} {}",
        file.file_name().unwrap_or_default().to_string_lossy()
    );

    let viewport = if fullscreen {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(&title)
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            let player = audio::open_player(audio, resolver.clone(), audio_policy);
            let presenter = Presenter {
                deck,
                state: PresentationState::new(start),
                router,
                player,
            };
            Ok(Box::new(PresentationApp {
                presenter,
                theme,
                images: ImageCache::new(resolver),
            }))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::testing::RecordingPlayer;
    use crate::state::JumpPolicy;

    fn presenter(deck: Result<SlideDeck, String>, player: &RecordingPlayer) -> Presenter {
        Presenter {
            deck,
            state: PresentationState::default(),
            router: InputRouter::new(JumpPolicy::default()),
            player: Box::new(player.clone()),
        }
    }

    fn sample() -> SlideDeck {
        let content = include_str!("../../../sample-decks/trivia-night/slides.json");
        SlideDeck::from_json(content).unwrap()
    }

    #[test]
    fn test_cues_reach_player() {
        let player = RecordingPlayer::default();
        let mut presenter = presenter(Ok(sample()), &player);

        presenter.press(KeyPress::Char('q'));
        presenter.press(KeyPress::Char('7'));
        presenter.press(KeyPress::Char('1'));
        presenter.press(KeyPress::Char('x'));

        assert_eq!(player.cues(), vec!["round-start", "Alarm", "Alarm"]);
        assert_eq!(presenter.view(), View::Image { name: "bonus" });
    }

    #[test]
    fn test_failed_deck_ignores_keys() {
        let player = RecordingPlayer::default();
        let mut presenter = presenter(Err("malformed slide data".to_string()), &player);

        for c in "qa1".chars() {
            presenter.press(KeyPress::Char(c));
        }
        presenter.press(KeyPress::Delete);

        assert!(player.cues().is_empty());
        assert_eq!(
            presenter.view(),
            View::Unavailable {
                reason: "malformed slide data"
            }
        );
    }
}
