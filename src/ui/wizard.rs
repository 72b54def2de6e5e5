// src/ui/wizard.rs
use eframe::egui;
use crate::config::{QuadrantTemplate, QUADRANTS};
use crate::state::{DraftField, WizardSession, LAST_STEP};
use super::UiAction;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
const COMPLETE_GREEN: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);

pub fn show_wizard_view(
    ui: &mut egui::Ui,
    session: &mut WizardSession,
    history_available: bool,
) -> Option<UiAction> {
    // Header
    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.heading(egui::RichText::new("AQAL Explorer").size(32.0).strong());
        ui.label("Transform complexity into clarity through structured reflection");
    });

    ui.add_space(16.0);
    show_progress(ui, session);
    ui.add_space(16.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .max_height((ui.available_height() - 48.0).max(120.0))
        .show(ui, |ui| {
            match session.step() {
                0 => show_challenge_step(ui, session),
                1..=4 => {
                    if let Some(template) = session.current_quadrant() {
                        show_quadrant_step(ui, session, template);
                    }
                }
                _ => show_synthesis_step(ui, session),
            }
        });

    ui.add_space(8.0);
    show_navigation(ui, session, history_available)
}

fn show_progress(ui: &mut egui::Ui, session: &WizardSession) {
    ui.horizontal(|ui| {
        ui.label(session.step_label());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!("{}% Complete", session.progress_percent().round()));
        });
    });
    ui.add(
        egui::ProgressBar::new(session.progress_percent() / 100.0)
            .desired_width(ui.available_width())
    );
}

fn show_challenge_step(ui: &mut egui::Ui, session: &mut WizardSession) {
    ui.group(|ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Define Your Challenge");
            ui.label("What problem or goal is on your mind? Be specific and honest.");
        });
        ui.add_space(8.0);

        ui.add(
            egui::TextEdit::multiline(session.draft.field_mut(DraftField::Challenge))
                .desired_width(f32::INFINITY)
                .desired_rows(6)
                .hint_text("Describe the challenge, decision, or goal you want to explore...")
        );
    });
}

fn show_quadrant_step(ui: &mut egui::Ui, session: &mut WizardSession, template: &QuadrantTemplate) {
    ui.group(|ui| {
        ui.vertical_centered(|ui| {
            ui.heading(template.title);
            ui.label(egui::RichText::new(template.subtitle).color(ACCENT));
            ui.add_space(4.0);
            ui.weak(template.description);
        });
        ui.add_space(8.0);

        ui.strong("Consider these questions:");
        for question in template.questions {
            ui.horizontal(|ui| {
                ui.colored_label(ACCENT, "•");
                ui.label(question);
            });
        }
        ui.add_space(8.0);

        ui.add(
            egui::TextEdit::multiline(session.draft.field_mut(DraftField::Quadrant(template.id)))
                .id_source(template.id.key())
                .desired_width(f32::INFINITY)
                .desired_rows(8)
                .hint_text("Reflect on this perspective and write your thoughts...")
        );
    });
}

fn show_synthesis_step(ui: &mut egui::Ui, session: &mut WizardSession) {
    // Synthesis dashboard
    ui.group(|ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Your Four Perspectives");
            ui.label("Review your reflections from all quadrants");
        });
        ui.add_space(8.0);

        ui.strong("Your Challenge:");
        ui.label(session.draft.challenge.as_str());
        ui.add_space(8.0);

        egui::Grid::new("perspectives_grid")
            .num_columns(2)
            .spacing([16.0, 16.0])
            .show(ui, |ui| {
                for (index, quadrant) in QUADRANTS.iter().enumerate() {
                    ui.vertical(|ui| {
                        ui.set_width(ui.available_width().min(360.0));
                        ui.colored_label(ACCENT, quadrant.title);
                        let reflection = session.draft.quadrants.get(quadrant.id);
                        if reflection.is_empty() {
                            ui.weak("No reflection added");
                        } else {
                            ui.label(reflection);
                        }
                    });
                    if index % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
    });

    ui.add_space(16.0);

    // Synthesis questions
    ui.group(|ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Synthesis & Action");
            ui.label("Transform your reflections into insights and concrete next steps");
        });
        ui.add_space(8.0);

        ui.strong("Key Insights");
        ui.label(
            "Looking at these four perspectives, what are the 1-3 most important realizations \
             you've had? What are the common threads or contradictions?"
        );
        ui.add(
            egui::TextEdit::multiline(session.draft.field_mut(DraftField::Insights))
                .desired_width(f32::INFINITY)
                .desired_rows(5)
                .hint_text("Write your key insights here...")
        );

        ui.add_space(12.0);

        ui.strong("Action Plan");
        ui.label("What is one small, concrete step you can take in the next 72 hours based on these insights?");
        ui.add(
            egui::TextEdit::multiline(session.draft.field_mut(DraftField::ActionPlan))
                .desired_width(f32::INFINITY)
                .desired_rows(5)
                .hint_text("Write your specific action plan here...")
        );
    });
}

fn show_navigation(
    ui: &mut egui::Ui,
    session: &WizardSession,
    history_available: bool,
) -> Option<UiAction> {
    let mut action = None;
    let can_proceed = session.can_proceed();

    ui.horizontal(|ui| {
        if ui.add_enabled(session.step() > 0, egui::Button::new("⬅ Back")).clicked() {
            action = Some(UiAction::Back);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if session.step() < LAST_STEP {
                if ui.add_enabled(can_proceed, egui::Button::new("Continue ➡")).clicked() {
                    action = Some(UiAction::Continue);
                }
            } else {
                let button = egui::Button::new(
                    egui::RichText::new("✔ Complete & Save").color(egui::Color32::WHITE)
                )
                .fill(COMPLETE_GREEN);
                if ui.add_enabled(can_proceed, button).clicked() {
                    action = Some(UiAction::Complete);
                }
            }

            if history_available && ui.button("View History").clicked() {
                action = Some(UiAction::ViewHistory);
            }
        });
    });

    action
}
