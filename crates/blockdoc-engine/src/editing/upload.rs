use super::commands::EditError;

/// Result of a successful upload: a stable URL the image/icon/column blocks
/// consume opaquely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The service refused the file (type, size, auth).
    #[error("upload rejected: {0}")]
    Rejected(String),
    /// The service could not be reached or failed mid-transfer.
    #[error("upload failed: {0}")]
    Transport(String),
}

/// Upload capability injected by the owning surface.
///
/// The engine never inspects file bytes and never retries; a failure is
/// returned to the caller so the editing surface can offer a retry.
pub trait UploadService {
    fn upload(&self, bytes: &[u8], filename: &str) -> Result<UploadedFile, UploadError>;
}

/// Failure of an upload-backed edit: either the upload itself, or applying
/// the resulting URL to the document.
#[derive(Debug, thiserror::Error)]
pub enum AttachError {
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error(transparent)]
    Edit(#[from] EditError),
}
