use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use image::DynamicImage;
use log::{debug, info};
use parking_lot::RwLock;

use crate::config::CacheConfig;
use crate::images::{self, ImageError};

/// Minimum time between staleness-triggered full purges.
pub const DEFAULT_PURGE_COOLDOWN: Duration = Duration::from_secs(5 * 60);

#[derive(Clone)]
struct CachedImage {
    image: Arc<DynamicImage>,
    inserted_at: Instant,
}

impl CachedImage {
    fn new(image: DynamicImage) -> Self {
        Self {
            image: Arc::new(image),
            inserted_at: Instant::now(),
        }
    }

    fn age(&self) -> Duration {
        Instant::now().saturating_duration_since(self.inserted_at)
    }
}

// Keyed cache for decoded images. Entries are overwritten per key but only
// ever removed wholesale: clear() flushes everything, and clear_if_stale()
// does the same at most once per cooldown window.
pub struct ImageCache {
    images: RwLock<HashMap<String, CachedImage>>,
    last_purge: RwLock<Instant>,
    purge_cooldown: Duration,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::with_cooldown(DEFAULT_PURGE_COOLDOWN)
    }

    pub fn with_cooldown(purge_cooldown: Duration) -> Self {
        Self {
            images: RwLock::new(HashMap::new()),
            last_purge: RwLock::new(Instant::now()),
            purge_cooldown,
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_cooldown(config.purge_cooldown())
    }

    pub fn get_image(&self, key: &str) -> Option<Arc<DynamicImage>> {
        let images = self.images.read();
        images.get(key).map(|entry| entry.image.clone())
    }

    /// Like `get_image`, but also reports how long ago the entry was stored.
    pub fn get_image_with_age(&self, key: &str) -> Option<(Arc<DynamicImage>, u64)> {
        let images = self.images.read();
        images
            .get(key)
            .map(|entry| (entry.image.clone(), entry.age().as_secs()))
    }

    pub fn store_image(&self, key: &str, image: DynamicImage) {
        let mut images = self.images.write();
        images.insert(key.to_string(), CachedImage::new(image));
        debug!("Cached image for key '{}'", key);
    }

    /// Decodes raw encoded bytes and stores the resulting bitmap.
    pub fn store_encoded(&self, key: &str, data: &[u8]) -> Result<(), ImageError> {
        let image = images::decode(data)?;
        self.store_image(key, image);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.images.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.read().is_empty()
    }

    /// Empties the cache unconditionally and restarts the purge cooldown.
    pub fn clear(&self) {
        let mut images = self.images.write();
        let count = images.len();
        images.clear();
        *self.last_purge.write() = Instant::now();
        info!("Image cache cleared ({} entries dropped)", count);
    }

    /// Full purge, gated on the cooldown since the last purge. Returns
    /// whether a purge actually happened.
    pub fn clear_if_stale(&self) -> bool {
        {
            let last_purge = self.last_purge.read();
            if last_purge.elapsed() < self.purge_cooldown {
                return false;
            }
        }
        self.clear();
        true
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}
