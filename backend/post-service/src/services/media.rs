/// Media host client: pushes post images to an S3-compatible bucket
use crate::config::MediaConfig;
use crate::middleware::upload::UploadedImage;
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Image upload failed: {0}")]
    Upload(String),
}

/// Third-party host that stores images and hands back a public URL
#[async_trait]
pub trait MediaHost: Send + Sync {
    async fn upload_image(&self, image: &UploadedImage) -> Result<String, MediaError>;
}

#[derive(Clone)]
pub struct S3MediaHost {
    client: Arc<Client>,
    config: MediaConfig,
}

impl S3MediaHost {
    pub fn new(client: Client, config: MediaConfig) -> Self {
        Self {
            client: Arc::new(client),
            config,
        }
    }

    /// Build a client from the standard AWS credential chain
    pub async fn from_config(config: MediaConfig) -> Self {
        let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_sdk_s3::config::Region::new(config.region.clone()))
            .load()
            .await;
        Self::new(Client::new(&aws_config), config)
    }
}

/// `<folder>/<uuid>.<ext>`, extension taken from the content type
pub fn object_key(folder: &str, image: &UploadedImage) -> String {
    let ext = match image.content_type.subtype().as_str() {
        "jpeg" => "jpg",
        "svg+xml" => "svg",
        other => other,
    };
    format!("{}/{}.{}", folder.trim_matches('/'), Uuid::new_v4(), ext)
}

#[async_trait]
impl MediaHost for S3MediaHost {
    async fn upload_image(&self, image: &UploadedImage) -> Result<String, MediaError> {
        let key = object_key(&self.config.folder, image);

        self.client
            .put_object()
            .bucket(&self.config.bucket)
            .key(&key)
            .content_type(image.content_type.essence_str())
            .body(ByteStream::from(image.bytes.clone()))
            .send()
            .await
            .map_err(|e| MediaError::Upload(e.to_string()))?;

        tracing::debug!(%key, size = image.bytes.len(), "image uploaded");

        Ok(self.config.object_url(&key))
    }
}
