/// Multipart form parsing for post uploads
///
/// Reads the `image` file part and the `caption` text part into memory before
/// the post controller runs. Unknown parts are drained and ignored.
use crate::error::AppError;
use actix_multipart::{Field, Multipart};
use futures_util::StreamExt;

pub const IMAGE_FIELD: &str = "image";
pub const CAPTION_FIELD: &str = "caption";

const MAX_TEXT_FIELD_BYTES: usize = 64 * 1024;

/// An image part held in memory
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: Option<String>,
    pub content_type: mime::Mime,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct PostForm {
    pub caption: Option<String>,
    pub image: Option<UploadedImage>,
}

/// Parse a post form. `max_upload_bytes` caps the image part.
pub async fn read_post_form(
    mut payload: Multipart,
    max_upload_bytes: usize,
) -> Result<PostForm, AppError> {
    let mut form = PostForm::default();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| {
            AppError::validation(format!("Malformed multipart payload: {}", e))
        })?;

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            IMAGE_FIELD => {
                let file_name = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .filter(|f| !f.is_empty())
                    .map(str::to_string);
                let content_type = field
                    .content_type()
                    .cloned()
                    .unwrap_or(mime::APPLICATION_OCTET_STREAM);

                let bytes = read_field(&mut field, max_upload_bytes).await?;

                // Browsers send an empty part when no file was picked
                if bytes.is_empty() && file_name.is_none() {
                    continue;
                }

                if content_type.type_() != mime::IMAGE {
                    return Err(AppError::validation(format!(
                        "Unsupported image type: {}",
                        content_type.essence_str()
                    )));
                }

                form.image = Some(UploadedImage {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            CAPTION_FIELD => {
                let bytes = read_field(&mut field, MAX_TEXT_FIELD_BYTES).await?;
                let caption = String::from_utf8(bytes)
                    .map_err(|_| AppError::validation("Caption must be valid UTF-8"))?;
                form.caption = Some(caption);
            }
            _ => {
                read_field(&mut field, max_upload_bytes).await?;
            }
        }
    }

    Ok(form)
}

async fn read_field(field: &mut Field, limit: usize) -> Result<Vec<u8>, AppError> {
    let mut buf = Vec::new();

    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| {
            tracing::warn!("Error reading upload field: {}", e);
            AppError::validation("Failed to read upload")
        })?;

        if buf.len() + chunk.len() > limit {
            return Err(AppError::PayloadTooLarge(format!(
                "Upload exceeds {} byte limit",
                limit
            )));
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(buf)
}
