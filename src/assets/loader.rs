use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use flume::{Receiver, Sender};
use tokio::runtime::Runtime;

use crate::assets::handle::AssetHandle;
use crate::assets::prefab::Prefab;
use crate::errors::{Result, SpindleError};

fn loader_runtime() -> &'static Runtime {
    static RUNTIME: OnceLock<Runtime> = OnceLock::new();
    RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create asset loader runtime"))
}

/// Ordering token assigned at request time: strictly increasing for the
/// process lifetime, never reused. Lets a slot discard a stale completion
/// with a single comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SequenceId(pub u64);

static NEXT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Result of one resolved load request, delivered to the update loop.
#[derive(Debug)]
pub struct LoadCompletion {
    pub sequence: SequenceId,
    pub handle: AssetHandle,
    pub result: Result<Prefab>,
}

/// Host asset pipeline boundary: resolves a handle into a renderable
/// hierarchy. Runs on the loader's background runtime; failures must
/// surface as error values, never panics.
pub trait AssetResolver: Send + Sync + 'static {
    fn resolve(&self, handle: &AssetHandle) -> Result<Prefab>;
}

/// Adapter turning a closure into a resolver; handy for tests and hosts
/// with a bespoke pipeline.
pub struct FnResolver<F>(pub F);

impl<F> AssetResolver for FnResolver<F>
where
    F: Fn(&AssetHandle) -> Result<Prefab> + Send + Sync + 'static,
{
    fn resolve(&self, handle: &AssetHandle) -> Result<Prefab> {
        (self.0)(handle)
    }
}

/// Asynchronous asset loader.
///
/// `request` assigns a [`SequenceId`] synchronously — before any background
/// work starts — so callers can compare it against completions immediately.
/// The loader never cancels or deduplicates: multiple outstanding requests
/// are fine and completions arrive in whatever order resolution finishes.
pub struct AssetLoader {
    resolver: Arc<dyn AssetResolver>,
    tx: Sender<LoadCompletion>,
    rx: Receiver<LoadCompletion>,
    issued: AtomicU64,
}

impl AssetLoader {
    #[must_use]
    pub fn new(resolver: Arc<dyn AssetResolver>) -> Self {
        let (tx, rx) = flume::unbounded();
        Self {
            resolver,
            tx,
            rx,
            issued: AtomicU64::new(0),
        }
    }

    /// Issues a load request and returns its sequence id.
    pub fn request(&self, handle: AssetHandle) -> SequenceId {
        let sequence = SequenceId(NEXT_SEQUENCE.fetch_add(1, Ordering::Relaxed));
        self.issued.fetch_add(1, Ordering::Relaxed);
        log::debug!("load request {sequence:?} for {handle}");

        let resolver = Arc::clone(&self.resolver);
        let tx = self.tx.clone();
        loader_runtime().spawn(async move {
            let resolve_handle = handle.clone();
            let result =
                match tokio::task::spawn_blocking(move || resolver.resolve(&resolve_handle)).await
                {
                    Ok(result) => result,
                    Err(err) => Err(SpindleError::LoadFailed {
                        handle: handle.uri().to_string(),
                        reason: err.to_string(),
                    }),
                };
            // The receiving engine may already be gone during shutdown.
            let _ = tx.send(LoadCompletion {
                sequence,
                handle,
                result,
            });
        });

        sequence
    }

    /// Number of requests this loader has issued.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::Relaxed)
    }

    /// Drains completions that have arrived so far (non-blocking).
    pub fn poll(&self) -> impl Iterator<Item = LoadCompletion> + '_ {
        self.rx.try_iter()
    }

    /// Blocks for the next completion up to `timeout`. Intended for tests
    /// and headless tools; interactive hosts use [`poll`](Self::poll) from
    /// the update loop.
    #[must_use]
    pub fn wait(&self, timeout: Duration) -> Option<LoadCompletion> {
        self.rx.recv_timeout(timeout).ok()
    }
}
