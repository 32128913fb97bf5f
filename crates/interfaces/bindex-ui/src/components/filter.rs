use eframe::egui;

use bindex_app_core::{FilterVm, SelectorVm};
use bindex_core::TriggerAction;

use crate::theme::*;
use crate::utils::{cmd_button, section_label};

#[derive(Default)]
pub struct FilterResponse {
    pub object_changed: Option<String>,
    pub action_changed: Option<TriggerAction>,
    pub refresh_clicked: bool,
}

/// Filter bar: object selector trigger, action choice, refresh. The object
/// popover toggles open/closed and closes itself on selection.
pub fn draw(
    ui: &mut egui::Ui,
    selector: &SelectorVm,
    filter: &FilterVm,
    selector_open: &mut bool,
    selector_query: &mut String,
) -> FilterResponse {
    let mut resp = FilterResponse::default();

    ui.horizontal(|ui| {
        section_label(ui, "OBJECT");
        if selector.is_loading {
            ui.spinner();
        } else {
            let trigger_label = selector
                .selected_label
                .clone()
                .or_else(|| selector.selected_value.clone())
                .unwrap_or_else(|| "Select object".to_string());
            if ui
                .button(egui::RichText::new(trigger_label).color(COL_TEXT))
                .clicked()
            {
                *selector_open = !*selector_open;
            }
        }

        ui.separator();
        section_label(ui, "TRIGGERED WHEN");
        for action in &filter.actions {
            let clicked = ui.selectable_label(action.selected, action.label).clicked();
            if clicked && !action.selected {
                resp.action_changed = TriggerAction::from_value(action.value);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if cmd_button(ui, "REFRESH", "outline", true).clicked() {
                resp.refresh_clicked = true;
            }
        });
    });

    if *selector_open {
        resp.object_changed = object_popover(ui, selector, selector_query);
        if resp.object_changed.is_some() {
            *selector_open = false;
            selector_query.clear();
        }
    }

    resp
}

fn object_popover(
    ui: &mut egui::Ui,
    selector: &SelectorVm,
    query: &mut String,
) -> Option<String> {
    let mut chosen = None;

    egui::Frame::group(ui.style()).fill(COL_BG_DARK).show(ui, |ui| {
        ui.add(
            egui::TextEdit::singleline(query)
                .hint_text("Search objects")
                .desired_width(260.0),
        );

        let needle = query.to_lowercase();
        egui::ScrollArea::vertical()
            .id_salt("object-popover")
            .max_height(240.0)
            .show(ui, |ui| {
                for option in selector.options.iter().filter(|o| {
                    needle.is_empty()
                        || o.label.to_lowercase().contains(&needle)
                        || o.value.to_lowercase().contains(&needle)
                }) {
                    let selected = selector.selected_value.as_deref() == Some(option.value.as_str());
                    let text = format!("{}  ({})", option.label, option.value);
                    if ui.selectable_label(selected, text).clicked() {
                        chosen = Some(option.value.clone());
                    }
                }
            });
    });

    chosen
}
