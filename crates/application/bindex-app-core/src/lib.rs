pub mod app;
pub mod app_core;
mod async_runtime;
pub mod domain;
pub mod kernel;
pub mod orchestrator;
pub mod persistence;
pub mod ports;
pub mod viewmodel;

pub use app::ExplorerApp;
pub use app_core::*;
pub use domain::{AppSettings, AppState, BootState, ViewerData, ViewerSlot, ViewerState, Viewers};
pub use kernel::AppKernel;
pub use persistence::FileSettings;
pub use ports::*;
pub use viewmodel::*;
