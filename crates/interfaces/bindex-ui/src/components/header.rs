use eframe::egui;

use crate::theme::*;
use crate::utils::badge;

pub fn draw(ui: &mut egui::Ui, demo_mode: bool, busy: bool) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("BINDEX // DOMAIN PROCESS BINDINGS")
                .size(14.0)
                .strong()
                .color(COL_ACCENT),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if demo_mode {
                badge(ui, "DEMO DATA", false);
            } else {
                badge(ui, "LIVE ORG", true);
            }
            if busy {
                ui.spinner();
            }
        });
    });
    ui.add_space(4.0);
}
