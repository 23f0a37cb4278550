//! Avatar upload service.

use async_trait::async_trait;
use futures_util::future::try_join_all;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use shopfront_core::AvatarFile;
use tracing::info;

use super::http::ApiClient;
use crate::error::{ServiceError, ServiceResult};

/// Stores files and returns where they can be fetched from.
#[async_trait]
pub trait FileUploader: Send + Sync {
    /// Uploads `files` and returns their locations in input order.
    /// One failed file fails the whole call.
    async fn upload(&self, files: &[AvatarFile]) -> ServiceResult<Vec<String>>;
}

/// Response of `POST /files/upload`.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    originalname: String,
    #[serde(default)]
    filename: String,
    #[serde(default)]
    location: String,
}

impl ApiClient {
    async fn upload_one(&self, file: &AvatarFile) -> ServiceResult<String> {
        let url = self.url("/files/upload");
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;
        let form = Form::new().part("file", part);

        let response: UploadResponse = self
            .send_json("POST", &url, self.http().post(&url).multipart(form))
            .await?;

        if response.location.is_empty() {
            return Err(ServiceError::EmptyUpload);
        }

        info!(
            original = %response.originalname,
            stored = %response.filename,
            "File uploaded"
        );
        Ok(response.location)
    }
}

#[async_trait]
impl FileUploader for ApiClient {
    async fn upload(&self, files: &[AvatarFile]) -> ServiceResult<Vec<String>> {
        try_join_all(files.iter().map(|file| self.upload_one(file))).await
    }
}
