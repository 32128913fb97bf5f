use eframe::egui;

use bindex_app_core::{filter_vm, selector_vm, AppCommand, AppState, ViewerSlot};

use crate::app::BindexUiApp;
use crate::components::{filter, viewer};

/// Explorer layout: one filter bar over the three phase viewers.
pub fn draw(ui: &mut egui::Ui, state: &AppState, app: &mut BindexUiApp) {
    let selector = selector_vm(state);
    let filter_view = filter_vm(state);

    let resp = filter::draw(
        ui,
        &selector,
        &filter_view,
        &mut app.selector_open,
        &mut app.selector_query,
    );
    if let Some(developer_name) = resp.object_changed {
        app.core.dispatch(AppCommand::SelectObject(developer_name));
    }
    if let Some(action) = resp.action_changed {
        app.core.dispatch(AppCommand::SelectAction(action));
    }
    if resp.refresh_clicked {
        app.core.dispatch(AppCommand::RefreshBindings);
    }

    ui.add_space(6.0);
    ui.separator();
    ui.add_space(6.0);

    let instance_url = app.core.settings().instance_url.clone();
    let nav_base = (!instance_url.is_empty()).then_some(instance_url);

    ui.columns(ViewerSlot::ALL.len(), |columns| {
        for (column, slot) in columns.iter_mut().zip(ViewerSlot::ALL) {
            viewer::draw(column, state, slot, nav_base.as_deref());
        }
    });
}
