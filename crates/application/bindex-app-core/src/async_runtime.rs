use anyhow::Result;
use std::sync::OnceLock;

static SHARED: OnceLock<std::result::Result<tokio::runtime::Runtime, String>> = OnceLock::new();

/// Small IO runtime shared by every fetch worker thread. Building the
/// runtime can fail (resource limits), so the failure is cached and
/// re-reported on each call instead of panicking.
pub(crate) fn shared_runtime() -> Result<&'static tokio::runtime::Runtime> {
    let built = SHARED.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("bindex-io")
            .enable_all()
            .build()
            .map_err(|e| e.to_string())
    });
    match built {
        Ok(rt) => Ok(rt),
        Err(message) => Err(anyhow::anyhow!(message.clone())),
    }
}
