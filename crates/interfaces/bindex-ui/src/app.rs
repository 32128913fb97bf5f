use std::time::Duration;

use eframe::egui;

use bindex_app_core::{AppCommand, BootState, ExplorerApp};

use crate::components::header;
use crate::screens::explorer;
use crate::theme::*;
use crate::utils::cmd_button;

pub struct BindexUiApp {
    pub(crate) core: ExplorerApp,
    demo_mode: bool,

    // Selector popover state lives with the UI, not the store.
    pub(crate) selector_open: bool,
    pub(crate) selector_query: String,
}

impl BindexUiApp {
    pub fn new(core: ExplorerApp, demo_mode: bool) -> Self {
        Self {
            core,
            demo_mode,
            selector_open: false,
            selector_query: String::new(),
        }
    }
}

impl eframe::App for BindexUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.core.tick();
        if self.core.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        let state = self.core.state();

        egui::TopBottomPanel::top("bindex-header").show(ctx, |ui| {
            header::draw(ui, self.demo_mode, self.core.is_busy());
        });

        egui::CentralPanel::default().show(ctx, |ui| match &state.boot {
            BootState::Loading => {
                ui.add_space(24.0);
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading object metadata…");
                });
            }
            BootState::Failed(message) => {
                ui.add_space(24.0);
                ui.colored_label(
                    COL_DANGER,
                    format!("Failed to load object metadata: {message}"),
                );
                ui.add_space(8.0);
                if cmd_button(ui, "RETRY", "outline", true).clicked() {
                    self.core.dispatch(AppCommand::LoadEntityDefinitions);
                }
            }
            BootState::Ready => explorer::draw(ui, &state, self),
        });
    }
}
