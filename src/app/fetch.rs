use eframe::egui;

use super::{loader, rt};
use url::Url;

use crate::parser::{fetch_image, resolve_image_source, HttpHotelSource};
use crate::views::cards::builder::class;

/// Decoded image or failure, keyed by the source it was requested for.
pub enum ImageMsg {
    Ok {
        src: String,
        w: usize,
        h: usize,
        rgba: Vec<u8>,
    },
    Err {
        src: String,
    },
}

impl super::HotelGridApp {
    /// Page-load pass: loading message, then one fetch on the runtime.
    pub(super) fn start_fetch(&mut self, ctx: &egui::Context) {
        self.net.started = true;
        if !loader::begin_render(&mut self.page) {
            return;
        }
        ctx.request_repaint();

        let source = match HttpHotelSource::new(&self.api_url) {
            Ok(source) => source,
            Err(err) => {
                loader::finish_render(&mut self.page, Err(err), &mut self.rng);
                return;
            }
        };
        log::info!("hotel fetch start: url={}", source.url());

        let tx = self.net.tx.clone();
        let ctx2 = ctx.clone();
        rt().spawn(async move {
            let res = source.fetch_hotels().await;
            let _ = tx.send(res);
            ctx2.request_repaint();
        });
    }

    /// Sources the grid currently shows: each card's image and its star icon.
    fn visible_sources(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        if let Some(grid) = self.page.grid.as_ref() {
            for card in grid.cards() {
                if let Some(src) = card.image_src() {
                    out.push(src.to_string());
                }
                if let Some(star) = card.root().find(class::STAR).and_then(|s| s.attr("src")) {
                    out.push(star.to_string());
                }
            }
        }
        out.sort();
        out.dedup();
        out
    }

    /// Relative gallery uris resolve against the hotels endpoint.
    pub(super) fn schedule_image_downloads(&mut self, ctx: &egui::Context) {
        let base = Url::parse(&self.api_url).ok();
        for src in self.visible_sources() {
            if !self.images.wants(&src) {
                continue;
            }
            let source = match resolve_image_source(&src, base.as_ref()) {
                Ok(source) => source,
                Err(err) => {
                    log::warn!("image rejected: {err}");
                    self.images.mark_failed(src);
                    continue;
                }
            };
            self.images.loading.insert(src.clone());
            log::debug!("image schedule: src={src} source={source:?}");

            let tx = self.images.tx.clone();
            let ctx2 = ctx.clone();
            rt().spawn(async move {
                let msg = match fetch_image(&source).await {
                    Ok((w, h, rgba)) => ImageMsg::Ok { src, w, h, rgba },
                    Err(err) => {
                        log::warn!("image load failed: src={src} err={err}");
                        ImageMsg::Err { src }
                    }
                };
                let _ = tx.send(msg);
                ctx2.request_repaint();
            });
        }
    }

    /// Poll incoming async messages and update state accordingly.
    pub(super) fn poll_incoming(&mut self, ctx: &egui::Context) {
        while let Ok(res) = self.net.rx.try_recv() {
            loader::finish_render(&mut self.page, res, &mut self.rng);
            ctx.request_repaint();
        }

        while let Ok(msg) = self.images.rx.try_recv() {
            match msg {
                ImageMsg::Ok { src, w, h, rgba } => {
                    log::debug!("image ok: src={src} size={w}x{h}");
                    self.images.insert_texture(ctx, src, w, h, &rgba);
                }
                ImageMsg::Err { src } => self.images.mark_failed(src),
            }
        }
    }
}
