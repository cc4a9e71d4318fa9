// App state and the top-level egui layout. Fetching lives in fetch.rs,
// the render pass in loader.rs.

use eframe::egui::RichText;
use eframe::{egui, App};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::localization::translate;
use crate::ui_constants::{spacing, CARD_GAP, CARD_WIDTH};
use crate::views::cards::draw_card;

pub mod config;
mod fetch;
mod loader;
mod logs_ui;
mod page;
mod runtime;
mod state;

pub use runtime::rt;
use page::Page;
use state::{ImageState, NetState};

pub struct HotelGridApp {
    api_url: String,
    page: Page,
    net: NetState,
    images: ImageState,
    rng: StdRng,
}

impl HotelGridApp {
    pub fn new(api_url: String) -> Self {
        Self {
            api_url,
            page: Page::complete(),
            net: NetState::default(),
            images: ImageState::default(),
            rng: StdRng::from_entropy(),
        }
    }

    fn draw_top_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let results = self
                .page
                .results
                .as_ref()
                .map(|r| r.text.clone())
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| translate("top-results-empty"));
            ui.label(RichText::new(results).strong());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(translate("top-logs-button")).clicked() {
                    logs_ui::open_logs();
                }
            });
        });
    }

    /// Wrapping rows of fixed-width cards, centered in the available width.
    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let Some(grid) = self.page.grid.as_mut() else {
            return;
        };
        let textures = &self.images.textures;

        let avail = ui.available_width();
        let cols = (((avail + CARD_GAP) / (CARD_WIDTH + CARD_GAP)).floor() as usize).max(1);
        let used = cols as f32 * CARD_WIDTH + (cols - 1) as f32 * CARD_GAP;
        let left_pad = ((avail - used) / 2.0).max(0.0);

        for row in grid.cards_mut().chunks_mut(cols) {
            let row_len = row.len();
            ui.horizontal_top(|ui| {
                ui.add_space(left_pad);
                for (i, card) in row.iter_mut().enumerate() {
                    let resp = ui
                        .vertical(|ui| draw_card(ui, card, CARD_WIDTH, textures))
                        .inner;
                    if let Some(direction) = resp.nav_clicked {
                        if card.navigate(direction) {
                            log::debug!(
                                "carousel {direction}: src={}",
                                card.image_src().unwrap_or_default()
                            );
                        }
                    }
                    if i + 1 < row_len {
                        ui.add_space(CARD_GAP);
                    }
                }
            });
            ui.add_space(CARD_GAP);
        }
    }
}

impl App for HotelGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_incoming(ctx);
        if !self.net.started {
            self.start_fetch(ctx);
        }
        self.schedule_image_downloads(ctx);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            self.draw_top_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(status) = self.page.status.as_ref().filter(|s| !s.is_hidden()) {
                ui.add_space(spacing::MEDIUM);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(status.text()).size(16.0));
                });
                ui.add_space(spacing::MEDIUM);
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| self.draw_grid(ui));
        });

        logs_ui::draw_logs_viewport(ctx);
    }
}
