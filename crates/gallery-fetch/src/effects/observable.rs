use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::data::FetchState;
use crate::error::FetchError;

/// Single-slot holder for the outcome of one fetch.
///
/// Starts [`FetchState::Pending`] and settles at most once. Ownership enforces
/// the single subscriber: [`subscribe`](Self::subscribe) consumes the holder.
#[derive(Debug)]
pub struct ObservableResult<T> {
    rx: watch::Receiver<FetchState<T>>,
}

/// Write side of an [`ObservableResult`]. Consumed by the first write.
#[derive(Debug)]
pub(crate) struct Publisher<T> {
    tx: watch::Sender<FetchState<T>>,
}

impl<T> Publisher<T> {
    pub(crate) fn publish(self, value: T) {
        self.tx.send_replace(FetchState::Success(value));
    }

    pub(crate) fn fail(self, error: FetchError) {
        self.tx.send_replace(FetchState::Failure(Arc::new(error)));
    }
}

impl<T> ObservableResult<T> {
    pub(crate) fn channel() -> (Publisher<T>, Self) {
        let (tx, rx) = watch::channel(FetchState::Pending);
        (Publisher { tx }, Self { rx })
    }

    pub fn is_pending(&self) -> bool {
        self.rx.borrow().is_pending()
    }
}

impl<T: Clone> ObservableResult<T> {
    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState<T> {
        self.rx.borrow().clone()
    }

    /// Wait until the fetch settles and return the settled state.
    ///
    /// Returns [`FetchState::Pending`] if the publishing task ended without
    /// writing a result.
    pub async fn settled(&mut self) -> FetchState<T> {
        if let Ok(state) = self.rx.wait_for(FetchState::is_settled).await {
            return state.clone();
        }
        self.rx.borrow().clone()
    }
}

impl<T: Clone + Send + Sync + 'static> ObservableResult<T> {
    /// Register the one subscriber.
    ///
    /// `on_change` runs once, on a spawned task, when items are published.
    /// It never runs if the fetch fails.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn subscribe<F>(mut self, on_change: F) -> JoinHandle<()>
    where
        F: FnOnce(T) + Send + 'static,
    {
        tokio::spawn(async move {
            if let FetchState::Success(value) = self.settled().await {
                on_change(value);
            }
        })
    }
}
