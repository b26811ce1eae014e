use fhub_domain::font::FontId;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// A safe default for the change feed buffer.
pub(crate) const DEFAULT_CAPACITY: usize = 128;

/// A committed change to the registry.
///
/// Sent before the write lock is released, so subscribers see commit order even with
/// concurrent writers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    FontAdded { id: FontId, name: String },
    FontDeleted { id: FontId, name: String },
    GroupAdded { name: String },
    GroupUpdated { old_name: String, name: String },
    GroupDeleted { name: String },
    /// A font deletion removed a member from `groups`; `incomplete` lists the ones that
    /// fell below the minimum size and should be edited.
    GroupsPruned { font_name: String, groups: Vec<String>, incomplete: Vec<String> },
}

/// Receiving end of [`crate::FontRegistry::subscribe`].
#[derive(Debug)]
pub struct RegistryEvents {
    receiver: broadcast::Receiver<RegistryEvent>,
}

impl RegistryEvents {
    pub(crate) const fn new(receiver: broadcast::Receiver<RegistryEvent>) -> Self {
        Self { receiver }
    }

    /// Next event, or `None` once the registry is gone.
    ///
    /// A slow subscriber skips to the oldest retained event instead of failing.
    pub async fn recv(&mut self) -> Option<RegistryEvent> {
        let mut skipped = 0u64;
        loop {
            match self.receiver.recv().await {
                Ok(event) => {
                    if skipped > 0 {
                        warn!(skipped, "Registry subscriber lagged; continuing from oldest retained event");
                    }
                    return Some(event);
                },
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    skipped = skipped.saturating_add(n);
                    debug!(skipped = n, total_skipped = skipped, "Registry subscriber lagged");
                },
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Non-blocking variant of [`RegistryEvents::recv`]; `None` when nothing is pending.
    pub fn try_recv(&mut self) -> Option<RegistryEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    debug!(skipped = n, "Registry subscriber lagged");
                },
                Err(_) => return None,
            }
        }
    }
}
