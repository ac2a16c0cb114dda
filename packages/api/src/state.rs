use std::sync::{Arc, Mutex, PoisonError};

use store::text::FailureText;
use store::{NoticeKind, NoticeSlot};

use crate::error::SyncError;

/// Somewhere a page keeps its state between handler calls.
///
/// The UI implements this over a reactive signal; tests use [`SharedState`].
/// Closures run synchronously and must not hold the state across an await.
pub trait StateCell<S> {
    fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R;
    fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> R;
}

/// Plain shared state behind a mutex.
#[derive(Debug, Default)]
pub struct SharedState<S>(Arc<Mutex<S>>);

impl<S> Clone for SharedState<S> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<S> SharedState<S> {
    pub fn new(state: S) -> Self {
        Self(Arc::new(Mutex::new(state)))
    }
}

impl<S: Clone> SharedState<S> {
    pub fn snapshot(&self) -> S {
        self.with(S::clone)
    }
}

impl<S> StateCell<S> for SharedState<S> {
    fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let mut guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

pub(crate) fn notify<N: StateCell<NoticeSlot>>(notices: &N, kind: NoticeKind, message: impl Into<String>) {
    notices.update(|slot| {
        slot.show(kind, message);
    });
}

pub(crate) fn report<N: StateCell<NoticeSlot>>(notices: &N, err: &SyncError, text: FailureText) {
    let (kind, message) = err.notice(text);
    notify(notices, kind, message);
}
