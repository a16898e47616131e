// SPDX-License-Identifier: MPL-2.0
//! Observable value holder.
//!
//! Wraps a `tokio::sync::watch` channel so any number of views can follow a
//! value. Subscribers are only woken when the stored value actually changes.

use tokio::sync::watch;

/// A value that notifies subscribers when it changes.
#[derive(Debug)]
pub struct Observable<T> {
    sender: watch::Sender<T>,
}

impl<T> Observable<T>
where
    T: Clone + PartialEq,
{
    /// Creates an observable holding `value`.
    pub fn new(value: T) -> Self {
        let (sender, _) = watch::channel(value);
        Self { sender }
    }

    /// Returns a copy of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    /// Runs `f` against the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.sender.borrow())
    }

    /// Stores `value`, notifying subscribers if it differs from the current one.
    ///
    /// Returns `true` if subscribers were notified.
    pub fn set(&self, value: T) -> bool {
        self.sender.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        })
    }

    /// Returns a receiver that sees every subsequent change.
    ///
    /// The current value is already marked as seen.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }

    /// Returns the number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<T> Default for Observable<T>
where
    T: Clone + PartialEq + Default,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_holds_initial_value() {
        let observable = Observable::new(String::from("ready"));
        assert_eq!(observable.get(), "ready");
    }

    #[test]
    fn set_without_subscribers_still_stores_value() {
        let observable = Observable::new(1);
        assert!(observable.set(2));
        assert_eq!(observable.get(), 2);
    }

    #[test]
    fn subscriber_is_notified_of_change() {
        let observable = Observable::new(String::new());
        let mut receiver = observable.subscribe();
        assert!(!receiver.has_changed().unwrap());

        observable.set("hello".to_string());

        assert!(receiver.has_changed().unwrap());
        assert_eq!(*receiver.borrow_and_update(), "hello");
        assert!(!receiver.has_changed().unwrap());
    }

    #[test]
    fn setting_equal_value_does_not_notify() {
        let observable = Observable::new("same".to_string());
        let receiver = observable.subscribe();

        assert!(!observable.set("same".to_string()));
        assert!(!receiver.has_changed().unwrap());
    }

    #[test]
    fn with_borrows_current_value() {
        let observable = Observable::new(vec![1, 2, 3]);
        assert_eq!(observable.with(Vec::len), 3);
    }

    #[test]
    fn subscriber_count_tracks_receivers() {
        let observable: Observable<u8> = Observable::default();
        assert_eq!(observable.subscriber_count(), 0);
        let first = observable.subscribe();
        let _second = observable.subscribe();
        assert_eq!(observable.subscriber_count(), 2);
        drop(first);
        assert_eq!(observable.subscriber_count(), 1);
    }
}
