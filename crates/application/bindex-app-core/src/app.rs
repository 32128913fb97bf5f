use std::sync::Arc;

use crate::app_core::{AppCommand, AppStore};
use crate::domain::{AppSettings, AppState, BootState};
use crate::kernel::AppKernel;
use crate::ports::{BindingsPort, MetadataPort};

/// Concrete application shell the UI drives: a kernel over trait-object
/// ports plus the connection settings it was launched with.
pub struct ExplorerApp {
    kernel: AppKernel<dyn MetadataPort, dyn BindingsPort>,
    settings: AppSettings,
}

impl ExplorerApp {
    pub fn new(
        metadata: Arc<dyn MetadataPort>,
        bindings: Arc<dyn BindingsPort>,
        settings: AppSettings,
    ) -> Self {
        let kernel = AppKernel::new(AppStore::new(AppState::default()), metadata, bindings);
        Self { kernel, settings }
    }

    /// Kick off the boot metadata load. Idempotent enough for a UI to call
    /// once at startup.
    pub fn boot(&mut self) {
        self.kernel.dispatch(AppCommand::LoadEntityDefinitions);
    }

    pub fn dispatch(&mut self, cmd: AppCommand) {
        self.kernel.dispatch(cmd);
    }

    /// Fold in any worker results. Call once per frame.
    pub fn tick(&mut self) {
        self.kernel.tick();
    }

    pub fn state(&self) -> AppState {
        self.kernel.store.state()
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// True while anything is in flight; the UI keeps repainting while busy.
    pub fn is_busy(&self) -> bool {
        let state = self.state();
        matches!(state.boot, BootState::Loading) || state.viewers.any_loading()
    }
}
