//! Slide navigation state machine.
//!
//! Transitions never touch the audio device. A transition that wants a sound
//! returns a [`Cue`] and the caller hands it to the player.

use crate::deck::{Slide, SlideDeck};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveSet {
    #[default]
    Main,
    Special,
}

/// Why the splash screen is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Splash {
    /// Shown at startup before any input.
    Idle,
    /// Reached by advancing past the last slide.
    Terminal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartMode {
    #[default]
    Splash,
    FirstSlide,
}

impl StartMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "splash" => Some(Self::Splash),
            "first" => Some(Self::FirstSlide),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Splash => "splash",
            Self::FirstSlide => "first",
        }
    }
}

/// A fire-and-forget sound request produced by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue(pub String);

/// Whether a jump to a special slide that does not exist still sounds the alarm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpPolicy {
    pub alarm_cue: String,
    pub alarm_on_invalid: bool,
}

impl Default for JumpPolicy {
    fn default() -> Self {
        Self {
            alarm_cue: "Alarm".to_string(),
            alarm_on_invalid: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationState {
    active_set: ActiveSet,
    main_index: usize,
    special_index: usize,
    show_answer: bool,
    splash: Option<Splash>,
}

impl Default for PresentationState {
    fn default() -> Self {
        Self::new(StartMode::Splash)
    }
}

impl PresentationState {
    pub fn new(start: StartMode) -> Self {
        Self {
            active_set: ActiveSet::Main,
            main_index: 0,
            special_index: 0,
            show_answer: false,
            splash: match start {
                StartMode::Splash => Some(Splash::Idle),
                StartMode::FirstSlide => None,
            },
        }
    }

    pub fn active_set(&self) -> ActiveSet {
        self.active_set
    }

    pub fn main_index(&self) -> usize {
        self.main_index
    }

    pub fn special_index(&self) -> usize {
        self.special_index
    }

    pub fn show_answer(&self) -> bool {
        self.show_answer
    }

    pub fn show_splash(&self) -> bool {
        self.splash.is_some()
    }

    pub fn splash(&self) -> Option<Splash> {
        self.splash
    }

    /// The slide of the active set at its current position.
    pub fn current_slide<'a>(&self, deck: &'a SlideDeck) -> Option<&'a Slide> {
        match self.active_set {
            ActiveSet::Main => deck.main.get(self.main_index),
            ActiveSet::Special => deck.special.get(self.special_index),
        }
    }

    pub fn current_main_slide<'a>(&self, deck: &'a SlideDeck) -> Option<&'a Slide> {
        deck.main.get(self.main_index)
    }

    /// Move forward in the active set. Past the last slide the terminal splash
    /// is shown instead of wrapping. Always returns focus to the main set.
    pub fn advance(&mut self, deck: &SlideDeck) -> Option<Cue> {
        let mut cue = None;
        let mut reached_end = false;

        match self.active_set {
            ActiveSet::Special => {
                if self.special_index + 1 < deck.special.len() {
                    self.special_index += 1;
                } else {
                    reached_end = true;
                }
            }
            ActiveSet::Main => {
                if self.main_index + 1 < deck.main.len() {
                    self.main_index += 1;
                    cue = deck.main[self.main_index]
                        .audio_cue()
                        .map(|name| Cue(name.to_string()));
                } else {
                    reached_end = true;
                }
            }
        }

        self.show_answer = false;
        self.active_set = ActiveSet::Main;
        self.splash = reached_end.then_some(Splash::Terminal);
        log::debug!(
            "advance -> main {} special {} splash {:?}",
            self.main_index,
            self.special_index,
            self.splash
        );
        cue
    }

    /// Move back in the active set, stopping at the first slide.
    pub fn retreat(&mut self) {
        match self.active_set {
            ActiveSet::Special => self.special_index = self.special_index.saturating_sub(1),
            ActiveSet::Main => self.main_index = self.main_index.saturating_sub(1),
        }
        self.show_answer = false;
        self.splash = None;
        log::debug!(
            "retreat -> {:?} main {} special {}",
            self.active_set,
            self.main_index,
            self.special_index
        );
    }

    /// Flip the answer overlay. Only main slides with an answer respond.
    pub fn toggle_answer(&mut self, deck: &SlideDeck) {
        if self.active_set != ActiveSet::Main {
            return;
        }
        if self
            .current_main_slide(deck)
            .and_then(Slide::answer_text)
            .is_some()
        {
            self.show_answer = !self.show_answer;
            log::debug!("answer visible: {}", self.show_answer);
        }
    }

    /// Show special slide `n` (1-based), dismissing any splash. Out-of-range
    /// numbers leave the state untouched; whether they still sound the alarm
    /// is up to `policy`.
    pub fn jump_to_special(&mut self, n: u8, deck: &SlideDeck, policy: &JumpPolicy) -> Option<Cue> {
        let alarm = Cue(policy.alarm_cue.clone());
        let target = usize::from(n)
            .checked_sub(1)
            .filter(|index| *index < deck.special.len());

        match target {
            Some(index) => {
                self.active_set = ActiveSet::Special;
                self.special_index = index;
                self.show_answer = false;
                self.splash = None;
                log::debug!("jump -> special {index}");
                Some(alarm)
            }
            None => {
                log::debug!(
                    "jump to special {n} ignored, only {} special slides",
                    deck.special.len()
                );
                policy.alarm_on_invalid.then_some(alarm)
            }
        }
    }
}
