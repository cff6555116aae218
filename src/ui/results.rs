// src/ui/results.rs
use eframe::egui;

use crate::analysis::{AnalysisResult, ScoreBand, OVERALL_MAX};

// Same palette the service's web frontend uses for its gauges.
const SUCCESS_COLOR: egui::Color32 = egui::Color32::from_rgb(0x4c, 0xaf, 0x50);
const WARNING_COLOR: egui::Color32 = egui::Color32::from_rgb(0xff, 0x98, 0x00);
const DANGER_COLOR: egui::Color32 = egui::Color32::from_rgb(0xf4, 0x43, 0x36);

pub fn band_color(band: ScoreBand) -> egui::Color32 {
    match band {
        ScoreBand::Success => SUCCESS_COLOR,
        ScoreBand::Warning => WARNING_COLOR,
        ScoreBand::Danger => DANGER_COLOR,
    }
}

pub fn show_results(ui: &mut egui::Ui, result: &AnalysisResult) {
    ui.heading("Analysis Results");
    ui.add_space(8.0);

    let overall_band = ScoreBand::for_score(result.overall_score, OVERALL_MAX);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(result.overall_score.to_string())
                .size(42.0)
                .strong()
                .color(band_color(overall_band)),
        );
        ui.weak("out of 100");
    });

    ui.add_space(8.0);
    ui.separator();
    ui.heading("Score Breakdown");
    ui.add_space(4.0);

    egui::Grid::new("score_breakdown_grid")
        .num_columns(3)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            for (label, score, max) in result.breakdown.rows() {
                let band = ScoreBand::for_score(score, max);
                ui.label(label);
                ui.add(
                    egui::ProgressBar::new(score as f32 / max as f32)
                        .desired_width(220.0)
                        .fill(band_color(band)),
                );
                ui.monospace(format!("{}/{}", score, max));
                ui.end_row();
            }
        });

    ui.add_space(8.0);
    ui.separator();
    ui.heading("Recommendations");
    ui.add_space(4.0);

    if result.recommendations.is_empty() {
        ui.label("No recommendations - Great job!");
    } else {
        // Service order is meaningful; no sorting or deduplication.
        for recommendation in &result.recommendations {
            ui.label(format!("• {}", recommendation));
        }
    }
}
