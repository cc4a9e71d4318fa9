// App state split out of app.rs: the hotel fetch channel and the texture cache.

use eframe::egui;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::mpsc;

use super::fetch::ImageMsg;
use crate::parser::FetchError;
use crate::views::cards::Textures;

pub type FetchResult = Result<Vec<Value>, FetchError>;

pub struct NetState {
    /// Set once the page-load pass has been kicked off.
    pub started: bool,
    pub tx: mpsc::Sender<FetchResult>,
    pub rx: mpsc::Receiver<FetchResult>,
}

impl Default for NetState {
    fn default() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            started: false,
            tx,
            rx,
        }
    }
}

pub struct ImageState {
    /// Keyed by image source (uri or local path).
    pub textures: Textures,
    pub loading: HashSet<String>,
    pub failed: HashSet<String>,
    pub tx: mpsc::Sender<ImageMsg>,
    pub rx: mpsc::Receiver<ImageMsg>,
}

impl Default for ImageState {
    fn default() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            textures: Textures::new(),
            loading: HashSet::new(),
            failed: HashSet::new(),
            tx,
            rx,
        }
    }
}

impl ImageState {
    /// Whether `src` still needs a download.
    pub fn wants(&self, src: &str) -> bool {
        !self.textures.contains_key(src) && !self.loading.contains(src) && !self.failed.contains(src)
    }

    pub fn insert_texture(&mut self, ctx: &egui::Context, src: String, w: usize, h: usize, rgba: &[u8]) {
        let image = egui::ColorImage::from_rgba_unmultiplied([w, h], rgba);
        let tex = ctx.load_texture(format!("img_{src}"), image, egui::TextureOptions::default());
        self.loading.remove(&src);
        self.textures.insert(src, tex);
    }

    pub fn mark_failed(&mut self, src: String) {
        self.loading.remove(&src);
        self.failed.insert(src);
    }
}
