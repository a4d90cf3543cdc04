//! What the renderer should draw for a given state.

use crate::deck::SlideDeck;
use crate::state::{ActiveSet, PresentationState, Splash};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
    /// The deck failed to load.
    Unavailable { reason: &'a str },
    /// The deck has no main slides.
    Empty,
    Splash(Splash),
    Answer { text: &'a str },
    Image { name: &'a str },
    Question {
        text: &'a str,
        options: Vec<(char, &'a str)>,
    },
}

pub fn derive<'a>(state: &PresentationState, deck: &'a SlideDeck) -> View<'a> {
    if deck.is_empty() {
        return View::Empty;
    }
    if let Some(kind) = state.splash() {
        return View::Splash(kind);
    }
    if state.show_answer() && state.active_set() == ActiveSet::Main {
        if let Some(text) = state
            .current_main_slide(deck)
            .and_then(|slide| slide.answer_text())
        {
            return View::Answer { text };
        }
    }

    let Some(slide) = state.current_slide(deck) else {
        return View::Empty;
    };
    match slide.image_name() {
        Some(name) => View::Image { name },
        None => View::Question {
            text: &slide.question,
            options: slide.options(),
        },
    }
}
