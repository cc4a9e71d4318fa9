// Logs viewport (separate OS window) with colored levels and utilities.

use eframe::egui;
use lazy_static::lazy_static;
use log::Level;
use std::sync::RwLock;
use std::time::Duration;

use crate::localization::{translate, translate_with};

lazy_static! {
    static ref LOGS_OPEN: RwLock<bool> = RwLock::new(false);
    static ref AUTOSCROLL: RwLock<bool> = RwLock::new(true);
}

pub fn open_logs() {
    set_flag(&LOGS_OPEN, true);
}

fn close_logs() {
    set_flag(&LOGS_OPEN, false);
}

fn logs_open() -> bool {
    flag(&LOGS_OPEN, false)
}

fn flag(lock: &RwLock<bool>, default: bool) -> bool {
    lock.read().map(|g| *g).unwrap_or(default)
}

fn set_flag(lock: &RwLock<bool>, value: bool) {
    if let Ok(mut g) = lock.write() {
        *g = value;
    }
}

pub fn draw_logs_viewport(ctx: &egui::Context) {
    if !logs_open() {
        return;
    }

    ctx.show_viewport_deferred(
        egui::ViewportId::from_hash_of("logs_window"),
        egui::ViewportBuilder::default()
            .with_title(translate("logs-window-title"))
            .with_inner_size([800.0, 500.0])
            .with_resizable(true),
        move |ctx, _class| {
            if ctx.input(|i| i.viewport().close_requested()) {
                close_logs();
                return;
            }
            // Own repaint schedule: poll the buffer while nothing else wakes us.
            if crate::logger::take_new_flag() {
                ctx.request_repaint();
            } else {
                ctx.request_repaint_after(Duration::from_millis(500));
            }

            egui::CentralPanel::default().show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button(translate("logs-clear")).clicked() {
                        crate::logger::clear();
                    }
                    if ui.button(translate("logs-copy")).clicked() {
                        let text = crate::logger::get_all().join("\n");
                        ui.output_mut(|o| o.copied_text = text);
                    }
                    let mut autoscroll = flag(&AUTOSCROLL, true);
                    if ui
                        .checkbox(&mut autoscroll, translate("logs-autoscroll"))
                        .changed()
                    {
                        set_flag(&AUTOSCROLL, autoscroll);
                    }
                    ui.separator();
                    ui.label(translate_with(
                        "logs-lines",
                        &[("count", crate::logger::len().to_string())],
                    ));
                });
                ui.separator();

                let scroll = egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .stick_to_bottom(flag(&AUTOSCROLL, true));

                let total = crate::logger::len();
                let row_height = ui.text_style_height(&egui::TextStyle::Monospace) + 2.0;
                // One layout job per visible range keeps the widget count low.
                scroll.show_rows(ui, row_height, total, |ui, row_range| {
                    let mut job = egui::text::LayoutJob::default();
                    crate::logger::for_each_range(row_range.start, row_range.end, |e| {
                        let fmt = egui::TextFormat {
                            color: color_for_level(e.level),
                            font_id: egui::FontId::monospace(12.0),
                            ..Default::default()
                        };
                        let line = format!("[{:>5}] {}: {}\n", e.level, e.target, e.msg);
                        job.append(&line, 0.0, fmt);
                    });
                    ui.label(job);
                });
            });
        },
    );
}

fn color_for_level(level: Level) -> egui::Color32 {
    match level {
        Level::Error => egui::Color32::from_rgb(220, 80, 80),
        Level::Warn => egui::Color32::from_rgb(235, 200, 80),
        Level::Info => egui::Color32::from_rgb(200, 200, 200),
        Level::Debug => egui::Color32::from_rgb(120, 180, 255),
        Level::Trace => egui::Color32::from_rgb(160, 160, 160),
    }
}
