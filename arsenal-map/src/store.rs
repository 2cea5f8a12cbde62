//! Value store with change notification
//!
//! Holds the current value; every `set` replaces it and wakes all
//! subscribers. A subscription ends when its receiver is dropped.

use tokio::sync::watch;

/// Current-value store backed by a watch channel
#[derive(Debug)]
pub struct Store<T> {
    tx: watch::Sender<T>,
}

/// Receiving end of a [`Store`]
pub type Subscription<T> = watch::Receiver<T>;

impl<T: Clone> Store<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Clone of the current value
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replace the value and notify subscribers
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Replace the value only if it differs; returns whether it did
    pub fn set_if_changed(&self, value: T) -> bool
    where
        T: PartialEq,
    {
        self.tx.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        })
    }

    pub fn subscribe(&self) -> Subscription<T> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl<T: Clone + Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
