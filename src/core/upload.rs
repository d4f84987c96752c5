//! Image upload.
//!
//! Images are shrunk to fit a 300x300 box, JPEG-encoded at a fixed low
//! quality, and sent as a single-file multipart PUT. The backend answers with
//! the stored image URL as plain text.

use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;

use crate::core::endpoint::Endpoint;
use crate::core::http::{ApiClient, ApiConfig};
use crate::core::request::{FilePart, RequestBuilder, RequestDescriptor};
use crate::error::{NetworkError, PawfeedError};

/// Side of the bounding box uploads are resized into.
pub const UPLOAD_BOX: u32 = 300;

/// JPEG quality (1-100) used for uploads.
pub const JPEG_QUALITY: u8 = 3;

pub const FIELD_NAME: &str = "file";
pub const FILE_NAME: &str = "image.jpg";
pub const MIME_TYPE: &str = "image/jpeg";

/// Load an image from disk.
///
/// # Errors
///
/// Returns [`PawfeedError::Image`] if the file cannot be read or decoded.
pub fn load_image(path: &Path) -> Result<DynamicImage, PawfeedError> {
    image::open(path).map_err(|e| PawfeedError::Image {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Resize into the upload box and encode as JPEG.
///
/// # Errors
///
/// Returns [`NetworkError::Unknown`] if encoding fails.
pub fn prepare_image(image: &DynamicImage) -> Result<Vec<u8>, NetworkError> {
    let resized = image.resize(UPLOAD_BOX, UPLOAD_BOX, FilterType::Triangle);
    let rgb = resized.to_rgb8();

    let mut buf = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(|e| NetworkError::Unknown(e.into()))?;

    let bytes = buf.into_inner();
    tracing::debug!(
        width = rgb.width(),
        height = rgb.height(),
        bytes = bytes.len(),
        "Prepared upload image"
    );
    Ok(bytes)
}

/// The single file part every upload carries.
#[must_use]
pub fn image_part(jpeg: Vec<u8>) -> FilePart {
    FilePart {
        field_name: FIELD_NAME.to_string(),
        file_name: FILE_NAME.to_string(),
        mime: MIME_TYPE.to_string(),
        bytes: jpeg,
    }
}

/// Build the upload descriptor for already-encoded JPEG bytes.
///
/// # Errors
///
/// Returns [`NetworkError::BadUrl`] if the configured base URL is invalid.
pub fn upload_request(config: &ApiConfig, jpeg: Vec<u8>) -> Result<RequestDescriptor, NetworkError> {
    RequestBuilder::endpoint(config, Endpoint::UploadImage)
        .multipart_file(image_part(jpeg))
        .build()
}

/// Prepare `image` and upload it, returning the URL the backend stored it at.
///
/// # Errors
///
/// Any [`NetworkError`] variant.
pub async fn upload_image(client: &ApiClient, image: &DynamicImage) -> Result<String, NetworkError> {
    let jpeg = prepare_image(image)?;
    let request = upload_request(client.config(), jpeg)?;
    client.send_text(request).await
}
