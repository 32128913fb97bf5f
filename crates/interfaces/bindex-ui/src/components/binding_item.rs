use eframe::egui;

use bindex_app_core::BindingItemVm;
use bindex_core::BINDING_OBJECT_API_NAME;
use bindex_platform::navigation;

use crate::theme::*;
use crate::utils::badge;

/// Glyph stand-ins for the platform icon identifiers.
fn icon_glyph(icon_name: Option<&'static str>) -> Option<&'static str> {
    match icon_name {
        Some("standard:invocable_action") => Some("⚡"),
        Some("standard:filter_criteria_rule") => Some("▼"),
        _ => None,
    }
}

pub fn draw(ui: &mut egui::Ui, item: &BindingItemVm, nav_base: Option<&str>) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("{:>3}", item.order_of_execution))
                .monospace()
                .color(COL_TEXT_DIM),
        );

        if let Some(glyph) = icon_glyph(item.icon_name) {
            ui.label(egui::RichText::new(glyph).color(COL_ACCENT));
        }

        let label = ui.add(
            egui::Label::new(
                egui::RichText::new(&item.label)
                    .color(COL_ACCENT)
                    .underline(),
            )
            .sense(egui::Sense::click()),
        );
        if label.clicked() {
            match nav_base {
                Some(base) => {
                    let url =
                        navigation::record_view_url(base, &item.record_id, BINDING_OBJECT_API_NAME);
                    ui.ctx().open_url(egui::OpenUrl::new_tab(url));
                }
                None => {
                    tracing::info!(
                        record = %item.record_id,
                        "record navigation needs a configured instance URL"
                    );
                }
            }
        }

        if item.show_async_marker {
            ui.label(egui::RichText::new("ASYNC").size(9.0).color(COL_WARN));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            badge(ui, item.active_badge_label, item.is_active);
        });
    });
}
