//! Push-based live query feeds.
//!
//! # Responsibility
//! - Fan one published value out to every current subscriber.
//! - Replay the latest value to late subscribers on level-triggered feeds.
//!
//! # Invariants
//! - Publishing never blocks on a subscriber; dropped subscribers are pruned.
//! - Every emission is a full value, never a delta.
//! - Each subscriber buffers a bounded number of values. Level-triggered
//!   feeds keep only the newest one; event feeds drop their oldest entry.
//! - Values arrive on whichever thread polls the `Subscription`.

use std::collections::VecDeque;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

/// Values an event-feed subscriber may hold before old ones are discarded.
pub const EVENT_BACKLOG: usize = 64;

/// Shared handle to a feed of full snapshots.
///
/// Clones share the same feed.
pub struct LiveQuery<T> {
    inner: Arc<Mutex<FeedState<T>>>,
}

struct FeedState<T> {
    replay_latest: bool,
    capacity: usize,
    latest: Option<T>,
    revision: u64,
    subscribers: Vec<Weak<Inbox<T>>>,
}

/// Per-subscriber buffer.
struct Inbox<T> {
    pending: Mutex<VecDeque<T>>,
    ready: Condvar,
}

impl<T> Inbox<T> {
    fn push(&self, value: T, capacity: usize) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.push_back(value);
        while pending.len() > capacity {
            pending.pop_front();
        }
        self.ready.notify_one();
    }
}

impl<T> Clone for LiveQuery<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> LiveQuery<T> {
    /// Creates a level-triggered feed: new subscribers get the latest value
    /// and unread values are replaced by newer ones.
    pub fn new() -> Self {
        Self::with_replay(true, 1)
    }

    /// Creates an event feed: subscribers only see values published after
    /// they subscribed, up to `EVENT_BACKLOG` unread values.
    pub fn events() -> Self {
        Self::with_replay(false, EVENT_BACKLOG)
    }

    fn with_replay(replay_latest: bool, capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FeedState {
                replay_latest,
                capacity,
                latest: None,
                revision: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Registers a new subscriber.
    pub fn subscribe(&self) -> Subscription<T> {
        let inbox = Arc::new(Inbox {
            pending: Mutex::new(VecDeque::new()),
            ready: Condvar::new(),
        });
        let mut state = self.lock();
        if state.replay_latest {
            if let Some(latest) = state.latest.as_ref() {
                inbox.push(latest.clone(), state.capacity);
            }
        }
        state.subscribers.push(Arc::downgrade(&inbox));
        Subscription { inbox }
    }

    /// Returns the most recently published value, if any.
    pub fn latest(&self) -> Option<T> {
        self.lock().latest.clone()
    }

    /// Returns the latest value together with its revision number.
    ///
    /// Revision `0` means nothing has been published yet.
    pub fn latest_with_revision(&self) -> (u64, Option<T>) {
        let state = self.lock();
        (state.revision, state.latest.clone())
    }

    /// Number of subscribers still connected at the last publish.
    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }

    pub(crate) fn publish(&self, value: T) {
        let mut state = self.lock();
        state.revision += 1;
        let capacity = state.capacity;
        state
            .subscribers
            .retain(|subscriber| match subscriber.upgrade() {
                Some(inbox) => {
                    inbox.push(value.clone(), capacity);
                    true
                }
                None => false,
            });
        state.latest = Some(value);
    }

    fn lock(&self) -> MutexGuard<'_, FeedState<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> Default for LiveQuery<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving end of a `LiveQuery`.
///
/// Dropping it unsubscribes.
pub struct Subscription<T> {
    inbox: Arc<Inbox<T>>,
}

impl<T> Subscription<T> {
    /// Returns the next pending value without blocking.
    pub fn try_next(&self) -> Option<T> {
        self.pending().pop_front()
    }

    /// Drains every pending value and returns the newest one.
    pub fn drain_latest(&self) -> Option<T> {
        self.pending().drain(..).last()
    }

    /// Waits up to `timeout` for the next value.
    ///
    /// Returns `None` on timeout.
    pub fn next_timeout(&self, timeout: Duration) -> Option<T> {
        let (mut pending, _) = self
            .inbox
            .ready
            .wait_timeout_while(self.pending(), timeout, |pending| pending.is_empty())
            .unwrap_or_else(PoisonError::into_inner);
        pending.pop_front()
    }

    fn pending(&self) -> MutexGuard<'_, VecDeque<T>> {
        self.inbox
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
