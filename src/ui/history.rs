// src/ui/history.rs
use eframe::egui;
use crate::state::Analysis;
use crate::utils::{format_local_date, truncate_preview};
use super::UiAction;

pub fn show_history_view(
    ui: &mut egui::Ui,
    analyses: &[Analysis],
    preview_chars: usize,
) -> Option<UiAction> {
    let mut action = None;

    ui.add_space(16.0);
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(egui::RichText::new("Your Analyses").size(28.0).strong());
            ui.label("Review your past explorations and insights");
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(egui::RichText::new("New Analysis").size(16.0)).clicked() {
                action = Some(UiAction::StartNew);
            }
            if ui.add_enabled(!analyses.is_empty(), egui::Button::new("Export CSV...")).clicked() {
                action = Some(UiAction::ExportCsv);
            }
        });
    });

    ui.add_space(16.0);

    if analyses.is_empty() {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.add_space(32.0);
                ui.weak("No analyses yet. Start your first exploration!");
                ui.add_space(8.0);
                if ui.button("Begin Your First Analysis").clicked() {
                    action = Some(UiAction::StartNew);
                }
                ui.add_space(32.0);
            });
        });
        return action;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for analysis in analyses {
                show_analysis_card(ui, analysis, preview_chars);
                ui.add_space(12.0);
            }
        });

    action
}

fn show_analysis_card(ui: &mut egui::Ui, analysis: &Analysis, preview_chars: usize) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.strong(egui::RichText::new(analysis.challenge.as_str()).size(17.0));
                ui.weak(format_local_date(&analysis.created_at));
            });
            if analysis.completed {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    ui.colored_label(egui::Color32::GREEN, "✔");
                });
            }
        });

        ui.add_space(8.0);

        ui.columns(2, |columns| {
            columns[0].strong("Key Insights");
            columns[0].label(truncate_preview(&analysis.insights, preview_chars));
            columns[1].strong("Action Plan");
            columns[1].label(truncate_preview(&analysis.action_plan, preview_chars));
        });
    });
}
