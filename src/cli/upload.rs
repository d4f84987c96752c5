//! `pawfeed upload`.

use std::path::Path;

use super::Session;
use crate::core::upload::load_image;
use crate::error::Result;

/// Load, shrink and upload an image, printing the URL the backend stored it at.
///
/// # Errors
///
/// [`crate::error::PawfeedError::Image`] if the file cannot be decoded, or
/// any network error.
pub async fn execute(file: &Path, session: &Session) -> Result<()> {
    let image = load_image(file)?;
    tracing::info!(path = %file.display(), width = image.width(), height = image.height(), "Uploading image");
    let url = session.api()?.upload_image(&image).await?;
    session.emit(&url)
}
