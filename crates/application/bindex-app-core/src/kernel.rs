use std::sync::Arc;

use tokio::sync::mpsc;

use crate::app_core::{AppCommand, AppStore, DomainEvent};
use crate::domain::{ViewerData, ViewerSlot};
use crate::orchestrator::{FetchOrchestrator, FetchSpec};
use crate::ports::{BindingsPort, MetadataPort};

/// Command/event kernel. UI code dispatches [`AppCommand`]s; background
/// workers answer over the event channel, drained by [`AppKernel::tick`].
pub struct AppKernel<M: ?Sized, B: ?Sized> {
    pub store: AppStore,
    metadata: Arc<M>,
    orchestrator: FetchOrchestrator<B>,

    tx: mpsc::Sender<DomainEvent>,
    rx: mpsc::Receiver<DomainEvent>,
}

impl<M, B> AppKernel<M, B>
where
    M: MetadataPort + ?Sized,
    B: BindingsPort + ?Sized,
{
    pub fn new(store: AppStore, metadata: Arc<M>, bindings: Arc<B>) -> Self {
        let (tx, rx) = mpsc::channel(bindex_config::EVENT_CHANNEL_CAPACITY);
        Self {
            store,
            metadata,
            orchestrator: FetchOrchestrator::new(bindings, tx.clone()),
            tx,
            rx,
        }
    }

    pub fn dispatch(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::LoadEntityDefinitions => self.load_entity_definitions(),

            AppCommand::SelectObject(developer_name) => {
                if self.store.state().selected_object.as_deref()
                    == Some(developer_name.as_str())
                {
                    return;
                }
                self.store.apply(DomainEvent::ObjectSelected(developer_name));
                self.refetch_all();
            }

            AppCommand::SelectAction(action) => {
                if self.store.state().selected_action == action {
                    return;
                }
                self.store.apply(DomainEvent::ActionSelected(action));
                self.refetch_all();
            }

            AppCommand::RefreshBindings => self.refresh_all(),
        }
    }

    /// Drain worker events into the store. A viewer event whose request id
    /// is not the slot's latest was superseded by a newer fetch and is
    /// dropped: last write wins by request issuance, not completion order.
    pub fn tick(&mut self) {
        while let Ok(ev) = self.rx.try_recv() {
            if let DomainEvent::ViewerEvent {
                slot, request_id, ..
            } = &ev
            {
                let current = self.store.state().viewers.get(*slot).request_id;
                if *request_id != current {
                    continue;
                }
            }

            let definitions_arrived = matches!(ev, DomainEvent::EntityDefinitionsLoaded { .. });
            self.store.apply(ev);

            // The boot default selection only exists after the object list
            // arrives; that is the first moment the viewers can fetch.
            if definitions_arrived {
                self.refetch_all();
            }
        }
    }

    pub fn sender(&self) -> mpsc::Sender<DomainEvent> {
        self.tx.clone()
    }

    fn load_entity_definitions(&mut self) {
        self.store.apply(DomainEvent::BootLoadingStarted);
        let tx = self.tx.clone();
        let metadata = self.metadata.clone();

        let spawn_res = std::thread::Builder::new()
            .name("bindex-load-metadata".into())
            .spawn(move || {
                let rt = match crate::async_runtime::shared_runtime() {
                    Ok(rt) => rt,
                    Err(e) => {
                        let _ = tx.blocking_send(DomainEvent::BootFailed {
                            message: format!("Failed to start async runtime: {e}"),
                        });
                        return;
                    }
                };

                rt.block_on(async {
                    let ev = match metadata.entity_definitions().await {
                        Ok(objects) => DomainEvent::EntityDefinitionsLoaded { objects },
                        Err(e) => DomainEvent::BootFailed {
                            message: e.to_string(),
                        },
                    };
                    let _ = tx.send(ev).await;
                });
            });

        if let Err(e) = spawn_res {
            self.store.apply(DomainEvent::BootFailed {
                message: format!("Failed to start metadata worker thread: {e}"),
            });
        }
    }

    /// Issue a fresh fetch for every slot against the current input triples,
    /// superseding whatever is in flight.
    fn refetch_all(&mut self) {
        let Some(object) = self.store.state().selected_object else {
            return;
        };

        let specs: Vec<FetchSpec> = self.store.with_state_mut(|state| {
            ViewerSlot::ALL
                .iter()
                .map(|&slot| {
                    let viewer = state.viewers.get_mut(slot);
                    viewer.request_id += 1;
                    viewer.is_loading = true;
                    viewer.data = ViewerData::Pending;
                    FetchSpec {
                        slot,
                        request_id: viewer.request_id,
                        object: object.clone(),
                        phase: viewer.phase,
                        is_async: viewer.is_async,
                    }
                })
                .collect()
        });

        for spec in specs {
            self.orchestrator.start_fetch(spec);
        }
    }

    /// Re-fetch every slot's current triple without discarding its rows.
    /// A slot that is still loading keeps its in-flight request: concurrent
    /// refreshes coalesce instead of stacking timers.
    fn refresh_all(&mut self) {
        let Some(object) = self.store.state().selected_object else {
            return;
        };

        let specs: Vec<FetchSpec> = self.store.with_state_mut(|state| {
            ViewerSlot::ALL
                .iter()
                .filter_map(|&slot| {
                    let viewer = state.viewers.get_mut(slot);
                    if viewer.is_loading {
                        return None;
                    }
                    viewer.request_id += 1;
                    viewer.is_loading = true;
                    Some(FetchSpec {
                        slot,
                        request_id: viewer.request_id,
                        object: object.clone(),
                        phase: viewer.phase,
                        is_async: viewer.is_async,
                    })
                })
                .collect()
        });

        for spec in specs {
            self.orchestrator.start_refresh(spec);
        }
    }
}
