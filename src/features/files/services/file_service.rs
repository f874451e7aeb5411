use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::files::dtos::{
    get_extension_from_content_type, FileResponseDto, FileVisibilityDto, PresignedUrlDto,
};
use crate::features::files::models::StoredFile;
use crate::modules::storage::{FileVisibility, ObjectStorageClient};

const FILE_COLUMNS: &str = "id, file_key, original_filename, content_type, file_size, url, \
     visibility, purpose, uploaded_by, is_active, created_at, updated_at";

/// Service for file upload, presigning, and deletion
pub struct FileService {
    pool: PgPool,
    storage: Arc<ObjectStorageClient>,
}

impl FileService {
    pub fn new(pool: PgPool, storage: Arc<ObjectStorageClient>) -> Self {
        Self { pool, storage }
    }

    fn to_storage_visibility(visibility: FileVisibilityDto) -> FileVisibility {
        match visibility {
            FileVisibilityDto::Public => FileVisibility::Public,
            FileVisibilityDto::Private => FileVisibility::Private,
        }
    }

    fn to_dto_visibility(visibility: &str) -> FileVisibilityDto {
        match visibility {
            "private" => FileVisibilityDto::Private,
            _ => FileVisibilityDto::Public,
        }
    }

    fn to_response(file: StoredFile) -> FileResponseDto {
        FileResponseDto {
            id: file.id,
            original_filename: file.original_filename,
            content_type: file.content_type,
            file_size: file.file_size,
            url: file.url,
            visibility: Self::to_dto_visibility(&file.visibility),
            purpose: file.purpose,
            created_at: file.created_at,
        }
    }

    /// Upload a file to object storage and record its metadata.
    pub async fn upload_file(
        &self,
        data: Vec<u8>,
        original_filename: &str,
        content_type: &str,
        visibility: FileVisibilityDto,
        purpose: Option<String>,
        user_id: &str,
    ) -> Result<FileResponseDto> {
        let file_size = data.len() as i64;

        let file_id = Uuid::new_v4();
        let extension = get_extension_from_content_type(content_type)
            .unwrap_or_else(|| original_filename.rsplit('.').next().unwrap_or("bin"));

        // Key layout: {prefix}/{purpose}/{user_id}/{file_id}.{extension}
        let purpose_path = purpose.as_deref().unwrap_or("uploads");
        let path = format!("{}/{}/{}.{}", purpose_path, user_id, file_id, extension);

        let storage_visibility = Self::to_storage_visibility(visibility);
        let file_key = self.storage.generate_key(storage_visibility, &path);

        self.storage.upload(&file_key, data, content_type).await?;

        debug!("File uploaded to storage: {}", file_key);

        let url = self.storage.get_file_url(&file_key);

        let visibility_str = match visibility {
            FileVisibilityDto::Public => "public",
            FileVisibilityDto::Private => "private",
        };

        let query = format!(
            "INSERT INTO files (file_key, original_filename, content_type, file_size, url, \
             visibility, purpose, uploaded_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {FILE_COLUMNS}"
        );

        let file = sqlx::query_as::<_, StoredFile>(&query)
            .bind(&file_key)
            .bind(original_filename)
            .bind(content_type)
            .bind(file_size)
            .bind(&url)
            .bind(visibility_str)
            .bind(&purpose)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        info!(
            "File metadata saved: id={}, key={}, visibility={}, size={}",
            file.id, file.file_key, file.visibility, file.file_size
        );

        Ok(Self::to_response(file))
    }

    /// Generate a presigned download URL for a file.
    ///
    /// Private files can only be presigned by their uploader.
    pub async fn get_presigned_url(&self, file_id: Uuid, user_id: &str) -> Result<PresignedUrlDto> {
        let query = format!("SELECT {FILE_COLUMNS} FROM files WHERE id = $1 AND is_active = TRUE");

        let file = sqlx::query_as::<_, StoredFile>(&query)
            .bind(file_id)
            .fetch_optional(&self.pool)
            .await?;

        let file = file.ok_or_else(|| AppError::NotFound("File not found".to_string()))?;

        if file.visibility == "private" && file.uploaded_by != user_id {
            return Err(AppError::Forbidden(
                "You do not have permission to access this file".to_string(),
            ));
        }

        let url = self.storage.get_presigned_url(&file.file_key).await?;

        Ok(PresignedUrlDto {
            url,
            expires_in_secs: self.storage.presigned_url_expiry_secs(),
        })
    }

    /// Delete a file by its URL.
    ///
    /// Only the uploader can delete it. The object is removed from storage
    /// and the metadata row is soft deleted.
    pub async fn delete_by_url(&self, url: &str, user_id: &str) -> Result<()> {
        let query = format!("SELECT {FILE_COLUMNS} FROM files WHERE url = $1 AND is_active = TRUE");

        let file = sqlx::query_as::<_, StoredFile>(&query)
            .bind(url)
            .fetch_optional(&self.pool)
            .await?;

        let file = file.ok_or_else(|| AppError::NotFound("File not found".to_string()))?;

        if file.uploaded_by != user_id {
            return Err(AppError::Forbidden(
                "You do not have permission to delete this file".to_string(),
            ));
        }

        self.storage.delete(&file.file_key).await?;

        debug!("File deleted from storage: {}", file.file_key);

        sqlx::query("UPDATE files SET is_active = FALSE, updated_at = NOW() WHERE id = $1")
            .bind(file.id)
            .execute(&self.pool)
            .await?;

        info!("File soft deleted: id={}, key={}", file.id, file.file_key);

        Ok(())
    }
}
