//! Media upload contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Result of uploading capture media.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaUpload {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// Upload endpoint, implemented by the HTTP client.
#[async_trait]
pub trait UploadsApi: Send + Sync {
    /// Uploads capture media as a multipart form and returns where the
    /// backend stored it.
    async fn upload_media(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<MediaUpload>;
}
