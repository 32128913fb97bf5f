use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use bindex_app_core::BindingsPort;
use bindex_core::{BindingRecord, TriggerOperation};

type CacheKey = (String, String, bool);

/// Response cache over any bindings collaborator, keyed by the query triple.
/// A plain fetch is answered from cache when possible; an explicit refresh
/// invalidates exactly its own triple and re-fetches.
pub struct CachedBindings<P> {
    inner: P,
    cache: Mutex<HashMap<CacheKey, Vec<BindingRecord>>>,
}

impl<P> CachedBindings<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }
}

fn key(object: &str, phase: TriggerOperation, is_async: bool) -> CacheKey {
    (object.to_string(), phase.to_string(), is_async)
}

#[async_trait]
impl<P: BindingsPort> BindingsPort for CachedBindings<P> {
    async fn domain_process_bindings(
        &self,
        object_developer_name: &str,
        phase: TriggerOperation,
        is_async: bool,
    ) -> anyhow::Result<Vec<BindingRecord>> {
        let key = key(object_developer_name, phase, is_async);
        if let Some(hit) = self.cache.lock().await.get(&key) {
            return Ok(hit.clone());
        }

        let records = self
            .inner
            .domain_process_bindings(object_developer_name, phase, is_async)
            .await?;
        self.cache.lock().await.insert(key, records.clone());
        Ok(records)
    }

    async fn refresh_domain_process_bindings(
        &self,
        object_developer_name: &str,
        phase: TriggerOperation,
        is_async: bool,
    ) -> anyhow::Result<Vec<BindingRecord>> {
        let key = key(object_developer_name, phase, is_async);
        self.cache.lock().await.remove(&key);

        let records = self
            .inner
            .refresh_domain_process_bindings(object_developer_name, phase, is_async)
            .await?;
        self.cache.lock().await.insert(key, records.clone());
        Ok(records)
    }
}
