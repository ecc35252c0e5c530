mod image;

pub use image::{ImageCache, DEFAULT_PURGE_COOLDOWN};
