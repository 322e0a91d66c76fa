//! Cloudinary Image Store
//!
//! HTTP adapter for the hosted image CDN. Uploads return the durable
//! `secure_url` plus the `public_id` that later deletion requires.

use serde::Deserialize;

use crate::domain::repository::{ImageStore, StoredImage};
use crate::error::{BookError, BookResult};

/// Cloudinary credentials
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

/// Cloudinary-backed image store
#[derive(Clone)]
pub struct CloudinaryImageStore {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryImageStore {
    pub fn new(config: CloudinaryConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/{}",
            self.config.cloud_name, action
        )
    }

    /// Sign a request: SHA-1 over the alphabetically sorted params
    /// joined with '&', with the API secret appended
    fn signature(&self, params: &[(&str, &str)]) -> String {
        let mut sorted: Vec<_> = params.to_vec();
        sorted.sort_by_key(|(k, _)| *k);

        let joined = sorted
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");

        platform::crypto::sha1_hex(format!("{joined}{}", self.config.api_secret).as_bytes())
    }

    fn timestamp() -> String {
        chrono::Utc::now().timestamp().to_string()
    }
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Deserialize)]
struct DestroyResponse {
    result: String,
}

impl ImageStore for CloudinaryImageStore {
    async fn upload(&self, payload: &str, folder: &str) -> BookResult<StoredImage> {
        let timestamp = Self::timestamp();
        let signature = self.signature(&[("folder", folder), ("timestamp", &timestamp)]);

        let form = [
            ("file", payload),
            ("folder", folder),
            ("timestamp", timestamp.as_str()),
            ("api_key", self.config.api_key.as_str()),
            ("signature", signature.as_str()),
        ];

        let response = self
            .client
            .post(self.endpoint("upload"))
            .form(&form)
            .send()
            .await
            .map_err(|e| BookError::ImageStore(format!("upload request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(BookError::ImageStore(format!(
                "upload rejected with status {}",
                response.status()
            )));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| BookError::ImageStore(format!("invalid upload response: {e}")))?;

        Ok(StoredImage {
            url: body.secure_url,
            delete_handle: body.public_id,
        })
    }

    async fn delete(&self, handle: &str) -> BookResult<()> {
        let timestamp = Self::timestamp();
        let signature = self.signature(&[("public_id", handle), ("timestamp", &timestamp)]);

        let form = [
            ("public_id", handle),
            ("timestamp", timestamp.as_str()),
            ("api_key", self.config.api_key.as_str()),
            ("signature", signature.as_str()),
        ];

        let response = self
            .client
            .post(self.endpoint("destroy"))
            .form(&form)
            .send()
            .await
            .map_err(|e| BookError::ImageStore(format!("destroy request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(BookError::ImageStore(format!(
                "destroy rejected with status {}",
                response.status()
            )));
        }

        let body: DestroyResponse = response
            .json()
            .await
            .map_err(|e| BookError::ImageStore(format!("invalid destroy response: {e}")))?;

        // "not found" counts as deleted; anything else is a real failure
        if body.result != "ok" && body.result != "not found" {
            return Err(BookError::ImageStore(format!(
                "destroy returned {}",
                body.result
            )));
        }

        Ok(())
    }
}
