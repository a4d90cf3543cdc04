use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Group names in the deck document.
pub const MAIN_GROUP: &str = "main_slides";
pub const SPECIAL_GROUP: &str = "special_slides";

/// One question/answer card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Slide {
    pub question: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub option_a: Option<String>,
    #[serde(default)]
    pub option_b: Option<String>,
    #[serde(default)]
    pub option_c: Option<String>,
    #[serde(default)]
    pub option_d: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

impl Slide {
    /// The answer text, if there is something to reveal.
    pub fn answer_text(&self) -> Option<&str> {
        non_empty(self.answer.as_deref())
    }

    /// The cue to play when this slide becomes current.
    pub fn audio_cue(&self) -> Option<&str> {
        non_empty(self.audio.as_deref())
    }

    pub fn image_name(&self) -> Option<&str> {
        non_empty(self.image.as_deref())
    }

    /// Labelled options in A..D order, skipping absent or empty ones.
    pub fn options(&self) -> Vec<(char, &str)> {
        [
            ('A', &self.option_a),
            ('B', &self.option_b),
            ('C', &self.option_c),
            ('D', &self.option_d),
        ]
        .into_iter()
        .filter_map(|(label, opt)| non_empty(opt.as_deref()).map(|text| (label, text)))
        .collect()
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed slide data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("slide key {key:?} in {group} is not an integer")]
    InvalidKey { group: &'static str, key: String },

    #[error("slide key {key:?} in {group} is out of range")]
    KeyOutOfRange { group: &'static str, key: String },
}

/// Both slide sequences, ordered by numeric key. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideDeck {
    pub main: Vec<Slide>,
    pub special: Vec<Slide>,
}

#[derive(Debug, Deserialize)]
struct RawDeck {
    #[serde(default)]
    main_slides: BTreeMap<String, Slide>,
    #[serde(default)]
    special_slides: BTreeMap<String, Slide>,
}

impl SlideDeck {
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let deck = Self::from_json(&content)?;
        log::info!(
            "Loaded {} main and {} special slides from {}",
            deck.main.len(),
            deck.special.len(),
            path.display()
        );
        Ok(deck)
    }

    pub fn from_json(content: &str) -> Result<Self, LoadError> {
        let raw: RawDeck = serde_json::from_str(content)?;
        Ok(Self {
            main: ordered(MAIN_GROUP, raw.main_slides)?,
            special: ordered(SPECIAL_GROUP, raw.special_slides)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.main.is_empty()
    }

    /// Every distinct image and audio name referenced by the deck, in deck order.
    pub fn asset_names(&self) -> (Vec<&str>, Vec<&str>) {
        let mut images: Vec<&str> = Vec::new();
        let mut sounds: Vec<&str> = Vec::new();
        for slide in self.main.iter().chain(&self.special) {
            if let Some(name) = slide.image_name() {
                if !images.contains(&name) {
                    images.push(name);
                }
            }
            if let Some(name) = slide.audio_cue() {
                if !sounds.contains(&name) {
                    sounds.push(name);
                }
            }
        }
        (images, sounds)
    }
}

/// Sort by the integer value of each key and drop the keys.
fn ordered(group: &'static str, slides: BTreeMap<String, Slide>) -> Result<Vec<Slide>, LoadError> {
    let mut keyed = slides
        .into_iter()
        .map(|(key, slide)| Ok((slide_key(group, key)?, slide)))
        .collect::<Result<Vec<_>, LoadError>>()?;
    keyed.sort_by_key(|(n, _)| *n);
    Ok(keyed.into_iter().map(|(_, slide)| slide).collect())
}

/// Plain decimal keys with an optional leading minus. No whitespace or `+`.
fn slide_key(group: &'static str, key: String) -> Result<i64, LoadError> {
    let digits = key.strip_prefix('-').unwrap_or(&key);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LoadError::InvalidKey { group, key });
    }
    match key.parse::<i64>() {
        Ok(n) => Ok(n),
        Err(_) => Err(LoadError::KeyOutOfRange { group, key }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn questions(slides: &[Slide]) -> Vec<&str> {
        slides.iter().map(|s| s.question.as_str()).collect()
    }

    #[test]
    fn test_numeric_key_order() {
        let json = r#"{
            "main_slides": {
                "2": {"question": "B"},
                "0": {"question": "A"},
                "1": {"question": "C"}
            },
            "special_slides": {}
        }"#;
        let deck = SlideDeck::from_json(json).unwrap();
        // sorted by key, not by question text: 0 => A, 1 => C, 2 => B
        assert_eq!(questions(&deck.main), vec!["A", "C", "B"]);
        assert!(deck.special.is_empty());
    }

    #[test]
    fn test_numeric_not_lexical_order() {
        let json = r#"{
            "main_slides": {
                "10": {"question": "ten"},
                "9": {"question": "nine"},
                "100": {"question": "hundred"},
                "-1": {"question": "minus one"}
            }
        }"#;
        let deck = SlideDeck::from_json(json).unwrap();
        assert_eq!(
            questions(&deck.main),
            vec!["minus one", "nine", "ten", "hundred"]
        );
    }

    #[test]
    fn test_sample_deck_loads() {
        let content = include_str!("../../../sample-decks/trivia-night/slides.json");
        let deck = SlideDeck::from_json(content).unwrap();
        assert_eq!(deck.main.len(), 6);
        assert_eq!(deck.special.len(), 3);
        assert_eq!(deck.main[0].image_name(), Some("title-card"));
        assert_eq!(deck.main[4].question, "Name the longest river in South America.");
        assert_eq!(deck.main[5].audio_cue(), Some("halftime-horn"));
        assert_eq!(
            questions(&deck.special),
            vec!["Bonus round", "Phones away!", "Last call at the bar"]
        );
    }

    #[test]
    fn test_non_numeric_key_fails() {
        let json = r#"{"main_slides": {"1": {"question": "ok"}, "two": {"question": "bad"}}}"#;
        let err = SlideDeck::from_json(json).unwrap_err();
        match err {
            LoadError::InvalidKey { group, key } => {
                assert_eq!(group, MAIN_GROUP);
                assert_eq!(key, "two");
            }
            other => panic!("expected InvalidKey, got {other:?}"),
        }
    }

    #[test]
    fn test_padded_or_signed_key_fails() {
        for key in [" 1", "1 ", "+1", "-", "", "1.0", "0x1"] {
            let json = format!(r#"{{"main_slides": {{"{key}": {{"question": "bad"}}}}}}"#);
            match SlideDeck::from_json(&json) {
                Err(LoadError::InvalidKey { key: reported, .. }) => assert_eq!(reported, key),
                other => panic!("expected InvalidKey for {key:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_overflowing_key_fails() {
        let json = r#"{"main_slides": {"99999999999999999999": {"question": "big"}}}"#;
        let err = SlideDeck::from_json(json).unwrap_err();
        assert!(matches!(err, LoadError::KeyOutOfRange { group: MAIN_GROUP, .. }));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_non_numeric_special_key_fails() {
        let json = r#"{"main_slides": {}, "special_slides": {"x": {"question": "bad"}}}"#;
        assert!(matches!(
            SlideDeck::from_json(json),
            Err(LoadError::InvalidKey { group: SPECIAL_GROUP, .. })
        ));
    }

    #[test]
    fn test_missing_question_fails() {
        let json = r#"{"main_slides": {"0": {"answer": "no question"}}}"#;
        assert!(matches!(
            SlideDeck::from_json(json),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_malformed_document_fails() {
        assert!(matches!(
            SlideDeck::from_json("{ not json"),
            Err(LoadError::Parse(_))
        ));
        assert!(matches!(
            SlideDeck::from_json(r#"{"main_slides": ["a", "b"]}"#),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_groups_are_empty() {
        let deck = SlideDeck::from_json("{}").unwrap();
        assert!(deck.is_empty());
        assert!(deck.special.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"main_slides": {{"0": {{"question": "Q", "answer": "A"}}}}}}"#
        )
        .unwrap();
        let deck = SlideDeck::load(file.path()).unwrap();
        assert_eq!(deck.main.len(), 1);
        assert_eq!(deck.main[0].answer_text(), Some("A"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = SlideDeck::load(&dir.path().join("slides.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("slides.json"));
    }

    #[test]
    fn test_options_skip_missing_and_empty() {
        let slide = Slide {
            question: "Q".to_string(),
            image: None,
            option_a: Some("first".to_string()),
            option_b: None,
            option_c: Some(String::new()),
            option_d: Some("last".to_string()),
            answer: Some(String::new()),
            audio: None,
        };
        assert_eq!(slide.options(), vec![('A', "first"), ('D', "last")]);
        assert_eq!(slide.answer_text(), None);
    }

    #[test]
    fn test_asset_names_deduplicated() {
        let content = include_str!("../../../sample-decks/trivia-night/slides.json");
        let deck = SlideDeck::from_json(content).unwrap();
        let (images, sounds) = deck.asset_names();
        assert_eq!(images, vec!["title-card", "halftime", "bonus"]);
        assert_eq!(sounds, vec!["round-start", "halftime-horn"]);
    }
}
