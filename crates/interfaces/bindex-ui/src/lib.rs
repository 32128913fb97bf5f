mod app;
mod components;
mod screens;
mod theme;
mod utils;

use std::sync::Arc;

use bindex_app_core::{
    AppSettings, BindingsPort, ExplorerApp, FileSettings, MetadataPort, SettingsRepo,
};
use bindex_platform::{CachedBindings, FixturePlatform, PlatformClient};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Pick collaborators for the saved settings: a live org when one is
/// configured and reachable, fixture data otherwise. Returns whether the
/// app is running on fixtures.
fn build_ports(
    settings: &AppSettings,
) -> (Arc<dyn MetadataPort>, Arc<dyn BindingsPort>, bool) {
    match PlatformClient::from_settings(settings) {
        Ok(client) => {
            tracing::info!(instance = %client.instance_url(), "using live org");
            let client = Arc::new(client);
            let bindings = Arc::new(CachedBindings::new(client.clone()));
            (client, bindings, false)
        }
        Err(e) => {
            tracing::warn!("no live org available ({e}); using fixture data");
            let fixture = Arc::new(FixturePlatform::new());
            let bindings = Arc::new(CachedBindings::new(fixture.clone()));
            (fixture, bindings, true)
        }
    }
}

pub fn run() -> eframe::Result<()> {
    setup_logging();

    let settings = FileSettings::new().load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load settings, falling back to defaults: {e}");
        AppSettings::default()
    });
    let (metadata, bindings, demo_mode) = build_ports(&settings);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([900.0, 560.0])
            .with_title("BINDEX // DOMAIN PROCESS BINDINGS"),
        ..Default::default()
    };

    eframe::run_native(
        "Bindex",
        options,
        Box::new(move |cc| {
            theme::setup(&cc.egui_ctx);

            let mut core = ExplorerApp::new(metadata, bindings, settings);
            core.boot();

            Ok(Box::new(app::BindexUiApp::new(core, demo_mode)))
        }),
    )
}
