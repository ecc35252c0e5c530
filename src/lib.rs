pub mod cache;
pub mod config;
pub mod images;

pub use cache::{ImageCache, DEFAULT_PURGE_COOLDOWN};
pub use config::CacheConfig;
pub use images::ImageError;
