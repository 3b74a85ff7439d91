//! Review photo uploads.
//!
//! Per-file uploads run in parallel against the blob store; every file
//! reaches a terminal state before the result returns, and per-file failures
//! are reported next to the successful URLs, never silently dropped.

use chrono::Utc;
use rand::{distr::Alphanumeric, Rng};

use crate::{
    model::review::{PhotoUploadFailureDto, PhotoUploadResultDto},
    server::{
        error::{review::ReviewError, Error},
        external::storage,
        service::review::MAX_PHOTOS,
    },
};

/// One file received from the multipart upload endpoint
pub struct PhotoUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Client-visible identifier tying one upload batch together; reviews do not
/// exist yet at upload time, so this stands in for the review id in the
/// object path.
fn draft_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect()
}

fn extension(file_name: &str) -> &str {
    file_name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("jpg")
}

pub struct PhotoService<'a> {
    storage_client: &'a storage::Client,
}

impl<'a> PhotoService<'a> {
    /// Creates a new instance of [`PhotoService`]
    pub fn new(storage_client: &'a storage::Client) -> Self {
        Self { storage_client }
    }

    /// Upload a batch of review photos in parallel.
    ///
    /// Object paths follow `{user_id}_{draft_id}_{index}_{timestamp}.{ext}`
    /// under the review-photos bucket.
    pub async fn upload_review_photos(
        &self,
        user_id: i32,
        files: Vec<PhotoUpload>,
    ) -> Result<PhotoUploadResultDto, Error> {
        if files.len() > MAX_PHOTOS {
            return Err(ReviewError::TooManyPhotos {
                max: MAX_PHOTOS,
                count: files.len(),
            }
            .into());
        }

        let batch_id = draft_id();
        let timestamp = Utc::now().timestamp();

        let uploads = files.into_iter().enumerate().map(|(index, file)| {
            let path = format!(
                "{}_{}_{}_{}.{}",
                user_id,
                batch_id,
                index,
                timestamp,
                extension(&file.file_name)
            );

            async move {
                let result = self
                    .storage_client
                    .put(&path, file.bytes, &file.content_type)
                    .await;

                (file.file_name, result)
            }
        });

        let outcomes = futures::future::join_all(uploads).await;

        let mut uploaded = Vec::new();
        let mut failed = Vec::new();

        for (file_name, result) in outcomes {
            match result {
                Ok(url) => uploaded.push(url),
                Err(e) => {
                    tracing::warn!(
                        file_name = %file_name,
                        "Review photo upload failed: {:?}",
                        e
                    );

                    failed.push(PhotoUploadFailureDto {
                        file_name,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(PhotoUploadResultDto { uploaded, failed })
    }
}
