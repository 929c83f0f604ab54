//! Pin image handling.
//!
//! Pins carry an opaque image reference; the bytes live behind
//! [`ImageStore`]. The in-memory implementation is the only one wired up,
//! but the trait keeps an object-storage backend possible without touching
//! the registries.

use std::collections::HashMap;
use std::sync::Mutex;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Backend for pin image payloads.
pub trait ImageStore: Send + Sync {
    /// Stores an image and returns its opaque reference.
    ///
    /// # Errors
    ///
    /// Returns a description of the rejected payload.
    fn put(&self, content_type: &str, data: Vec<u8>) -> Result<String, ImageError>;

    /// Fetches an image by reference.
    fn get(&self, reference: &str) -> Option<StoredImage>;
}

/// A stored image payload.
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub content_type: String,
    pub data: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("image payload is empty")]
    Empty,
    #[error("image payload exceeds {max} bytes", max = MAX_IMAGE_BYTES)]
    TooLarge,
    #[error("unsupported content type '{0}'")]
    UnsupportedType(String),
    #[error("invalid base64 payload")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// 5 MiB cap on decoded payloads.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

const ALLOWED_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

/// Process-local image store.
#[derive(Debug, Default)]
pub struct InMemoryImageStore {
    images: Mutex<HashMap<String, StoredImage>>,
}

impl InMemoryImageStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a base64 payload and stores it.
    ///
    /// # Errors
    ///
    /// See [`ImageError`].
    pub fn put_base64(&self, content_type: &str, encoded: &str) -> Result<String, ImageError> {
        let data = BASE64.decode(encoded)?;
        self.put(content_type, data)
    }
}

impl ImageStore for InMemoryImageStore {
    fn put(&self, content_type: &str, data: Vec<u8>) -> Result<String, ImageError> {
        if data.is_empty() {
            return Err(ImageError::Empty);
        }
        if data.len() > MAX_IMAGE_BYTES {
            return Err(ImageError::TooLarge);
        }
        if !ALLOWED_TYPES.contains(&content_type) {
            return Err(ImageError::UnsupportedType(content_type.to_owned()));
        }
        let reference = format!("img-{}", uuid::Uuid::new_v4());
        let mut images = self
            .images
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        images.insert(
            reference.clone(),
            StoredImage {
                content_type: content_type.to_owned(),
                data,
            },
        );
        Ok(reference)
    }

    fn get(&self, reference: &str) -> Option<StoredImage> {
        let images = self
            .images
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        images.get(reference).cloned()
    }
}
