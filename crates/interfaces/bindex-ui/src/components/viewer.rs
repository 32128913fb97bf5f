use eframe::egui;

use bindex_app_core::{viewer_vm, AppState, ViewerSlot};

use crate::components::binding_item;
use crate::theme::*;

pub fn draw(ui: &mut egui::Ui, state: &AppState, slot: ViewerSlot, nav_base: Option<&str>) {
    let vm = match viewer_vm(state, slot) {
        Ok(vm) => vm,
        Err(e) => {
            // Unreachable through ViewerSlot construction; if it ever shows
            // up the viewer refuses to render rather than guessing a title.
            tracing::error!("viewer state rejected: {e}");
            ui.colored_label(COL_DANGER, format!("Viewer unavailable: {e}"));
            return;
        }
    };

    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(vm.title)
                    .size(13.0)
                    .strong()
                    .color(COL_TEXT),
            );
            if vm.is_loading {
                ui.spinner();
            }
        });
        ui.label(
            egui::RichText::new(&vm.phase_label)
                .size(9.0)
                .color(COL_TEXT_DIM)
                .monospace(),
        );
        if let Some(count) = &vm.count_label {
            ui.label(egui::RichText::new(count).size(10.0).color(COL_TEXT_DIM));
        }
        ui.add_space(4.0);

        if let Some(error) = &vm.error {
            ui.colored_label(COL_DANGER, format!("Fetch failed: {error}"));
            return;
        }

        if let Some(placeholder) = vm.placeholder {
            ui.label(
                egui::RichText::new(placeholder)
                    .italics()
                    .color(COL_TEXT_DIM),
            );
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt(("viewer", vm.phase_label.clone(), vm.title))
            .show(ui, |ui| {
                for item in &vm.items {
                    binding_item::draw(ui, item, nav_base);
                    ui.add_space(2.0);
                }
            });
    });
}
