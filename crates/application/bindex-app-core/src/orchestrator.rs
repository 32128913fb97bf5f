use std::sync::Arc;

use tokio::sync::mpsc;

use bindex_core::{BindingRecord, TriggerOperation};

use crate::app_core::{DomainEvent, ViewerFetchEvent};
use crate::domain::ViewerSlot;
use crate::ports::BindingsPort;

/// One fetch to run: the slot it feeds, the request id that makes its result
/// current or stale, and the query triple.
#[derive(Debug, Clone)]
pub struct FetchSpec {
    pub slot: ViewerSlot,
    pub request_id: u64,
    pub object: String,
    pub phase: TriggerOperation,
    pub is_async: bool,
}

impl FetchSpec {
    fn viewer_event(&self, ev: ViewerFetchEvent) -> DomainEvent {
        DomainEvent::ViewerEvent {
            slot: self.slot,
            request_id: self.request_id,
            ev,
        }
    }
}

/// Runs binding fetches on worker threads and reports back as domain events.
/// The UI thread never blocks here; results land in the kernel's channel and
/// are folded in on the next tick.
pub struct FetchOrchestrator<B: ?Sized> {
    bindings: Arc<B>,
    tx: mpsc::Sender<DomainEvent>,
}

impl<B: BindingsPort + ?Sized> FetchOrchestrator<B> {
    pub fn new(bindings: Arc<B>, tx: mpsc::Sender<DomainEvent>) -> Self {
        Self { bindings, tx }
    }

    /// Fetch for a new input triple. Resolves as fast as the collaborator
    /// answers.
    pub fn start_fetch(&self, spec: FetchSpec) {
        self.spawn_worker("bindex-fetch-bindings", spec, false);
    }

    /// Explicit user-triggered refresh. Bypasses the collaborator's cache
    /// and does not resolve before the minimum visible duration has passed,
    /// so the user always sees that a reload was attempted.
    pub fn start_refresh(&self, spec: FetchSpec) {
        self.spawn_worker("bindex-refresh-bindings", spec, true);
    }

    fn spawn_worker(&self, thread_name: &str, spec: FetchSpec, refresh: bool) {
        let tx = self.tx.clone();
        let bindings = self.bindings.clone();
        let (slot, request_id) = (spec.slot, spec.request_id);

        let spawn_res = std::thread::Builder::new()
            .name(thread_name.into())
            .spawn(move || {
                let rt = match crate::async_runtime::shared_runtime() {
                    Ok(rt) => rt,
                    Err(e) => {
                        let _ = tx.blocking_send(spec.viewer_event(ViewerFetchEvent::Failed {
                            message: format!("Failed to start async runtime: {e}"),
                        }));
                        return;
                    }
                };

                rt.block_on(async {
                    let res = if refresh {
                        let (res, ()) = tokio::join!(
                            bindings.refresh_domain_process_bindings(
                                &spec.object,
                                spec.phase,
                                spec.is_async,
                            ),
                            tokio::time::sleep(bindex_config::min_refresh_visible()),
                        );
                        res
                    } else {
                        bindings
                            .domain_process_bindings(&spec.object, spec.phase, spec.is_async)
                            .await
                    };
                    let _ = tx.send(spec.viewer_event(fetch_event(res))).await;
                });
            });

        if let Err(e) = spawn_res {
            // Can't reach a worker; fail the viewer directly so the loading
            // flag does not stay stuck.
            let _ = self.tx.try_send(DomainEvent::ViewerEvent {
                slot,
                request_id,
                ev: ViewerFetchEvent::Failed {
                    message: format!("Failed to start fetch worker thread: {e}"),
                },
            });
        }
    }
}

fn fetch_event(res: anyhow::Result<Vec<BindingRecord>>) -> ViewerFetchEvent {
    match res {
        Ok(records) => ViewerFetchEvent::Loaded { records },
        Err(e) => ViewerFetchEvent::Failed {
            message: e.to_string(),
        },
    }
}
