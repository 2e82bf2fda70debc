use std::path::Path;

use bytes::Bytes;
use reqwest::multipart::Part;

use crate::error::{MugshotError, MugshotResult};

/// Part filename used when the caller does not supply one.
pub const DEFAULT_IMAGE_FILE_NAME: &str = "image.jpg";
/// Part content type used when the caller does not supply one.
pub const DEFAULT_IMAGE_MIME: &str = "application/octet-stream";

/// An image to upload as the `image` part of a multipart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    pub bytes: Bytes,
    pub file_name: String,
    pub mime: String,
}

impl ImageInput {
    pub fn new<B: Into<Bytes>>(bytes: B) -> Self {
        Self {
            bytes: bytes.into(),
            file_name: DEFAULT_IMAGE_FILE_NAME.to_string(),
            mime: DEFAULT_IMAGE_MIME.to_string(),
        }
    }

    /// Reads an image from disk. The part filename and content type follow the path.
    pub async fn from_path<P: AsRef<Path>>(path: P) -> MugshotResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| MugshotError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let mut image = Self::new(bytes);
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            image.file_name = name.to_string();
        }
        if let Some(mime) = mime_from_extension(path) {
            image.mime = mime.to_string();
        }
        crate::trace!("Loaded {} bytes from {}", image.len(), path.display());
        Ok(image)
    }

    pub fn with_file_name<S: Into<String>>(mut self, file_name: S) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_mime<S: Into<String>>(mut self, mime: S) -> Self {
        self.mime = mime.into();
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Fails with [`MugshotError::InvalidMime`] before anything is sent if `mime` does not parse.
    pub(crate) fn into_part(self) -> MugshotResult<Part> {
        let Self {
            bytes,
            file_name,
            mime,
        } = self;
        let len = bytes.len() as u64;
        Part::stream_with_length(bytes, len)
            .file_name(file_name)
            .mime_str(&mime)
            .map_err(|e| MugshotError::InvalidMime {
                reason: e.to_string(),
                mime,
            })
    }
}

fn mime_from_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

impl From<Vec<u8>> for ImageInput {
    fn from(v: Vec<u8>) -> Self {
        Self::new(v)
    }
}
impl From<&[u8]> for ImageInput {
    fn from(v: &[u8]) -> Self {
        Self::new(Bytes::copy_from_slice(v))
    }
}
impl<const N: usize> From<&[u8; N]> for ImageInput {
    fn from(v: &[u8; N]) -> Self {
        Self::new(Bytes::copy_from_slice(v))
    }
}
impl From<&Vec<u8>> for ImageInput {
    fn from(v: &Vec<u8>) -> Self {
        Self::new(Bytes::copy_from_slice(v))
    }
}
impl From<Bytes> for ImageInput {
    fn from(b: Bytes) -> Self {
        Self::new(b)
    }
}
