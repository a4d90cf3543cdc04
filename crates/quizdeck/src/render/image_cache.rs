use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use eframe::egui;

use crate::assets::AssetResolver;

/// Slide images, decoded on first use and kept as textures. Failed loads are
/// remembered so a missing image is reported once.
pub struct ImageCache {
    assets: AssetResolver,
    textures: RefCell<HashMap<String, Option<egui::TextureHandle>>>,
}

impl ImageCache {
    pub fn new(assets: AssetResolver) -> Self {
        Self {
            assets,
            textures: RefCell::new(HashMap::new()),
        }
    }

    pub fn get(&self, ctx: &egui::Context, name: &str) -> Option<egui::TextureHandle> {
        if let Some(entry) = self.textures.borrow().get(name) {
            return entry.clone();
        }

        let loaded = match self.load(ctx, name) {
            Ok(texture) => Some(texture),
            Err(e) => {
                log::warn!("{e:#}");
                None
            }
        };
        self.textures
            .borrow_mut()
            .insert(name.to_string(), loaded.clone());
        loaded
    }

    fn load(&self, ctx: &egui::Context, name: &str) -> anyhow::Result<egui::TextureHandle> {
        let path = self.assets.resolve_image(name).with_context(|| {
            format!(
                "Image {name:?} not found in {}",
                self.assets.base_path().display()
            )
        })?;
        let image = decode(&path)?;
        log::debug!("loaded image {}", path.display());
        Ok(ctx.load_texture(name, image, egui::TextureOptions::LINEAR))
    }
}

fn decode(path: &Path) -> anyhow::Result<egui::ColorImage> {
    let image = image::open(path)
        .with_context(|| format!("Failed to decode {}", path.display()))?
        .into_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, &image.into_raw()))
}
