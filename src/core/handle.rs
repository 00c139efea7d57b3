use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// One in-flight fetch. Cancelling is fire-and-forget: it only guarantees the
/// fetch's callback is suppressed locally, not that the transport stops.
///
/// Dropping a handle does NOT cancel the fetch; the spawned task keeps
/// running detached. Use [`HandleSlot`] where cancel-on-replace semantics are
/// wanted.
#[derive(Debug)]
pub struct FetchHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl FetchHandle {
    pub(crate) fn new(token: CancellationToken, task: JoinHandle<()>) -> Self {
        Self { token, task }
    }

    /// Suppresses the pending callback. Safe to call after the fetch has
    /// already completed; that is a no-op.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Waits for the underlying task to settle. Mainly useful in tests and
    /// teardown paths that need the fetch fully drained.
    pub async fn join(self) {
        let _ = self.task.await;
    }
}

/// Holder for at most one live [`FetchHandle`].
///
/// Assigning a new handle cancels the previous occupant first, so a slow
/// fetch started for an earlier association can never deliver into a slot
/// that has since moved on. Clearing or dropping the slot cancels too.
#[derive(Debug, Default)]
pub struct HandleSlot {
    current: Option<FetchHandle>,
}

impl HandleSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, handle: FetchHandle) {
        if let Some(previous) = self.current.replace(handle) {
            previous.cancel();
        }
    }

    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            previous.cancel();
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.current.is_some()
    }
}

impl Drop for HandleSlot {
    fn drop(&mut self) {
        self.clear();
    }
}
