pub mod panels;
pub mod plot;
pub mod table;

use eframe::egui::{self, RichText, Ui};

use crate::state::{AppState, Card};

/// Framed card with a title row and a full-screen toggle.
pub fn card(ui: &mut Ui, state: &mut AppState, which: Card, title: &str, body: impl FnOnce(&mut Ui, &mut AppState)) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.horizontal(|ui: &mut Ui| {
            ui.heading(title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
                let expanded = state.expanded_card == Some(which);
                let label = if expanded { "Close" } else { "⛶" };
                if ui
                    .small_button(RichText::new(label))
                    .on_hover_text(if expanded { "Back to dashboard" } else { "Full screen" })
                    .clicked()
                {
                    state.expanded_card = if expanded { None } else { Some(which) };
                }
            });
        });
        ui.separator();
        body(ui, state);
    });
}
