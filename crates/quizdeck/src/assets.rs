use std::path::{Path, PathBuf};

pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];
pub const AUDIO_EXTENSIONS: &[&str] = &["wav", "mp3", "ogg", "flac"];

/// Resolves logical asset names against a base directory.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    base_path: PathBuf,
}

impl AssetResolver {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Try the name as given, then with each extension appended.
    pub fn resolve(&self, name: &str, extensions: &[&str]) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }
        let exact = self.base_path.join(name);
        if exact.is_file() {
            return Some(exact);
        }
        extensions
            .iter()
            .map(|ext| self.base_path.join(format!("{name}.{ext}")))
            .find(|candidate| candidate.is_file())
    }

    pub fn resolve_image(&self, name: &str) -> Option<PathBuf> {
        self.resolve(name, IMAGE_EXTENSIONS)
    }

    pub fn resolve_audio(&self, name: &str) -> Option<PathBuf> {
        self.resolve(name, AUDIO_EXTENSIONS)
    }
}
