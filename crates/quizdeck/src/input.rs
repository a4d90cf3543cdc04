use eframe::egui;

use crate::deck::SlideDeck;
use crate::state::{Cue, JumpPolicy, PresentationState};

/// A key press with modifiers already stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Char(char),
    Delete,
    Backspace,
}

impl KeyPress {
    pub fn from_egui(key: egui::Key) -> Option<Self> {
        use egui::Key;
        let c = match key {
            Key::Delete => return Some(Self::Delete),
            Key::Backspace => return Some(Self::Backspace),
            Key::Q => 'q',
            Key::A => 'a',
            Key::Num1 => '1',
            Key::Num2 => '2',
            Key::Num3 => '3',
            Key::Num4 => '4',
            Key::Num5 => '5',
            Key::Num6 => '6',
            Key::Num7 => '7',
            Key::Num8 => '8',
            Key::Num9 => '9',
            _ => return None,
        };
        Some(Self::Char(c))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Advance,
    ToggleAnswer,
    JumpToSpecial(u8),
    Retreat,
}

impl Command {
    pub fn for_key(key: KeyPress) -> Option<Self> {
        match key {
            KeyPress::Char('q') => Some(Self::Advance),
            KeyPress::Char('a') => Some(Self::ToggleAnswer),
            KeyPress::Char(c @ '1'..='9') => c
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .map(Self::JumpToSpecial),
            KeyPress::Delete | KeyPress::Backspace => Some(Self::Retreat),
            KeyPress::Char(_) => None,
        }
    }
}

/// Routes key presses to exactly one state transition each.
#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    policy: JumpPolicy,
}

impl InputRouter {
    pub fn new(policy: JumpPolicy) -> Self {
        Self { policy }
    }

    pub fn handle(
        &self,
        key: KeyPress,
        state: &mut PresentationState,
        deck: &SlideDeck,
    ) -> Option<Cue> {
        let command = Command::for_key(key)?;
        let cue = match command {
            // advance also hands focus back to the main set
            Command::Advance => state.advance(deck),
            Command::ToggleAnswer => {
                state.toggle_answer(deck);
                None
            }
            Command::JumpToSpecial(n) => state.jump_to_special(n, deck, &self.policy),
            Command::Retreat => {
                state.retreat();
                None
            }
        };
        log::trace!(
            "{key:?} -> {command:?}: {:?} main {} special {} answer {} splash {}",
            state.active_set(),
            state.main_index(),
            state.special_index(),
            state.show_answer(),
            state.show_splash()
        );
        cue
    }
}

/// Key presses from this frame's events, in arrival order.
pub fn key_presses(input: &egui::InputState) -> Vec<KeyPress> {
    input
        .events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key, pressed: true, ..
            } => KeyPress::from_egui(*key),
            _ => None,
        })
        .collect()
}
