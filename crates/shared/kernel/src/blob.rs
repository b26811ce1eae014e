use fhub_domain::font::BlobUrl;
use fxhash::FxHashMap;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::{trace, warn};

const BLOB_KEY_LEN: usize = 16;

/// In-memory store behind [`BlobUrl`] handles.
///
/// Every handle returned by [`BlobStore::create`] must be released exactly once through
/// [`BlobStore::revoke`]. A second release is reported, not ignored.
#[derive(Default)]
pub struct BlobStore {
    blobs: Mutex<FxHashMap<String, Arc<[u8]>>>,
}

impl BlobStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` and returns a fresh handle to it.
    pub fn create(&self, data: Arc<[u8]>) -> BlobUrl {
        let mut blobs = self.blobs.lock();
        let key = loop {
            let key = crate::safe_nanoid!(BLOB_KEY_LEN);
            if !blobs.contains_key(&key) {
                break key;
            }
        };
        let url = BlobUrl::from_key(&key);
        trace!(url = %url, bytes = data.len(), "blob created");
        blobs.insert(key, data);
        url
    }

    /// The bytes behind a live handle.
    #[must_use]
    pub fn resolve(&self, url: &BlobUrl) -> Option<Arc<[u8]>> {
        self.blobs.lock().get(url.key()).cloned()
    }

    /// Releases a handle. Returns `false` (and logs a warning) if it was already released
    /// or never issued by this store.
    pub fn revoke(&self, url: &BlobUrl) -> bool {
        if self.blobs.lock().remove(url.key()).is_some() {
            trace!(url = %url, "blob revoked");
            true
        } else {
            warn!(url = %url, "blob handle released twice or unknown");
            false
        }
    }

    #[must_use]
    pub fn contains(&self, url: &BlobUrl) -> bool {
        self.blobs.lock().contains_key(url.key())
    }

    /// Number of live handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blobs.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blobs.lock().is_empty()
    }
}

impl fmt::Debug for BlobStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlobStore").field("live", &self.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_resolve_revoke() {
        let store = BlobStore::new();
        let url = store.create(Arc::from(vec![1u8, 2, 3]));

        assert!(url.as_str().starts_with(BlobUrl::SCHEME));
        assert_eq!(store.resolve(&url).as_deref(), Some(&[1u8, 2, 3][..]));
        assert_eq!(store.len(), 1);

        assert!(store.revoke(&url));
        assert!(store.is_empty());
        assert!(store.resolve(&url).is_none());
    }

    #[test]
    fn double_release_is_reported() {
        let store = BlobStore::new();
        let url = store.create(Arc::from(Vec::<u8>::new()));
        assert!(store.revoke(&url));
        assert!(!store.revoke(&url));
    }

    #[test]
    fn handles_are_distinct_for_equal_payloads() {
        let store = BlobStore::new();
        let data: Arc<[u8]> = Arc::from(vec![7u8; 8]);
        let a = store.create(Arc::clone(&data));
        let b = store.create(data);
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }
}
