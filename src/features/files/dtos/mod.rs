pub mod file_dto;

pub use file_dto::{
    get_extension_from_content_type, is_mime_type_allowed, DeleteFileByUrlDto,
    DeleteFileResponseDto, FileResponseDto, FileVisibilityDto, PresignedUrlDto, UploadFileDto,
    ALLOWED_MIME_TYPES,
};
