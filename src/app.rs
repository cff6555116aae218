// src/app.rs
use eframe::egui;

use crate::config::AppConfig;
use crate::state::AppState;
use crate::ui::{results, uploader};

pub struct QualityApp {
    state: AppState,
}

impl QualityApp {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        Ok(Self {
            state: AppState::new(config)?,
        })
    }
}

impl eframe::App for QualityApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pick up anything the upload worker sent since the last frame.
        self.state.drain_events();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Code Quality Analyzer");
            ui.weak("Upload a .js, .jsx, or .py file to analyze its code quality");
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_space(2.0);
            ui.weak("Code Quality Analyzer");
            ui.add_space(2.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            uploader::show_uploader(ui, &mut self.state);

            if let Some(error) = self.state.error_message.clone() {
                ui.add_space(8.0);
                ui.colored_label(egui::Color32::from_rgb(0xf4, 0x43, 0x36), error);
            }

            if self.state.is_loading() {
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Analyzing code... Please wait.");
                });
            }

            if let Some(result) = &self.state.result {
                ui.add_space(12.0);
                ui.separator();
                ui.add_space(8.0);
                egui::ScrollArea::vertical()
                    .id_source("results_scroll")
                    .show(ui, |ui| {
                        results::show_results(ui, result);
                    });
            }
        });
    }
}
