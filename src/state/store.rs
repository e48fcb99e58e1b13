//! Keyed store of shared reactive slots

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio::sync::watch;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("state slot '{key}' already holds a value of a different type")]
    TypeMismatch { key: String },
}

/// One session's worth of shared state. Slots are created lazily on first
/// access and live as long as the store.
#[derive(Default)]
pub struct StateStore {
    slots: Mutex<HashMap<String, Arc<dyn Any + Send + Sync>>>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the slot under `key`, running `init` only if it does not exist yet
    pub fn use_state<T, F>(&self, key: &str, init: F) -> Result<StateHandle<T>, StateError>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(slot) = slots.get(key) {
            return slot
                .clone()
                .downcast::<watch::Sender<T>>()
                .map(|sender| StateHandle { sender })
                .map_err(|_| StateError::TypeMismatch {
                    key: key.to_string(),
                });
        }

        tracing::debug!(key, "Initializing state slot");
        let (sender, _) = watch::channel(init());
        let sender = Arc::new(sender);
        slots.insert(key.to_string(), sender.clone());
        Ok(StateHandle { sender })
    }

    pub fn contains(&self, key: &str) -> bool {
        let slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        slots.contains_key(key)
    }
}

/// Shared handle to one slot. Every clone reads and writes the same value.
pub struct StateHandle<T> {
    sender: Arc<watch::Sender<T>>,
}

impl<T> Clone for StateHandle<T> {
    fn clone(&self) -> Self {
        StateHandle {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Clone> StateHandle<T> {
    /// Snapshot of the current value
    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    /// Replace the value; last write wins
    pub fn set(&self, value: T) {
        self.sender.send_replace(value);
    }

    /// Mutate in place and notify subscribers
    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        self.sender.send_modify(f);
    }

    /// Receiver that wakes on every write
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_runs_once() {
        let store = StateStore::new();
        let a = store.use_state("counter", || 1u32).unwrap();
        let b = store.use_state::<u32, _>("counter", || panic!("init must not run twice")).unwrap();
        a.set(5);
        assert_eq!(b.get(), 5);
    }

    #[test]
    fn test_type_mismatch() {
        let store = StateStore::new();
        store.use_state("slot", || 1u32).unwrap();
        let err = store.use_state("slot", String::new).err();
        assert_eq!(err, Some(StateError::TypeMismatch { key: "slot".into() }));
    }

    #[test]
    fn test_stores_are_isolated() {
        let first = StateStore::new();
        let second = StateStore::new();
        first.use_state("name", || "a".to_string()).unwrap().set("b".into());
        assert_eq!(second.use_state("name", || "a".to_string()).unwrap().get(), "a");
    }

    #[test]
    fn test_update_in_place() {
        let store = StateStore::new();
        let list = store.use_state("list", Vec::<u8>::new).unwrap();
        list.update(|v| v.push(7));
        list.update(|v| v.push(8));
        assert_eq!(list.get(), vec![7, 8]);
        assert!(store.contains("list"));
        assert!(!store.contains("other"));
    }

    #[tokio::test]
    async fn test_subscriber_sees_writes() {
        let store = StateStore::new();
        let handle = store.use_state("flag", || false).unwrap();
        let mut rx = handle.subscribe();

        let writer = handle.clone();
        tokio::spawn(async move { writer.set(true) });

        rx.changed().await.unwrap();
        assert!(*rx.borrow());
    }
}
