//! # Device name updates
//!
//! A local bus that tells interested screens the device was renamed.
//! Subscribing returns a guard; the subscription ends when the guard is
//! dropped, so a screen holds one exactly while it is started.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, Weak};

use uuid::Uuid;

type Subscribers = RwLock<HashMap<String, Arc<AtomicBool>>>;

/// Broadcasts "device name changed" to live subscriptions
#[derive(Debug, Default)]
pub struct DeviceNameBus {
    subscribers: Arc<Subscribers>,
}

impl DeviceNameBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start receiving updates
    pub fn subscribe(&self) -> DeviceNameSubscription {
        let id = Uuid::new_v4().to_string();
        let pending = Arc::new(AtomicBool::new(false));

        if let Ok(mut subs) = self.subscribers.write() {
            subs.insert(id.clone(), Arc::clone(&pending));
        }

        DeviceNameSubscription {
            id,
            pending,
            subscribers: Arc::downgrade(&self.subscribers),
        }
    }

    /// Notify every live subscription; returns how many were notified
    pub fn publish(&self) -> usize {
        self.subscribers
            .read()
            .map(|subs| {
                for pending in subs.values() {
                    pending.store(true, Ordering::SeqCst);
                }
                subs.len()
            })
            .unwrap_or(0)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().map(|s| s.len()).unwrap_or(0)
    }
}

/// A live subscription; unsubscribes on drop
#[derive(Debug)]
pub struct DeviceNameSubscription {
    id: String,
    pending: Arc<AtomicBool>,
    subscribers: Weak<Subscribers>,
}

impl DeviceNameSubscription {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// True if an update arrived since the last drain
    pub fn drain(&self) -> bool {
        self.pending.swap(false, Ordering::SeqCst)
    }
}

impl Drop for DeviceNameSubscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            if let Ok(mut subs) = subscribers.write() {
                subs.remove(&self.id);
            }
        }
    }
}
