// src/constants.rs
//
// Application-wide constants for the Keep export format and the remote APIs.

/// Key prefix of the boolean Keep fields that become tags (`isPinned` -> `pinned`).
///
/// Used in: `domain/tags.rs`
pub const FLAG_PREFIX: &str = "is";

/// Tag added once when at least one attachment was uploaded.
pub const IMAGE_TAG: &str = "image";

/// Tag added once when at least one attachment could not be found on disk.
pub const MIGRATION_ERROR_TAG: &str = "migration_error";

/// Extension of the exported note files; everything else in the input directory is ignored.
pub const NOTE_FILE_EXTENSION: &str = ".json";

/// Number of trailing file name characters used as the uploaded file's extension.
///
/// Keep exports use `.jpg`/`.png`/`.gif`; longer extensions such as `.jpeg`
/// end up truncated to `peg`.
///
/// Used in: `infrastructure/image_host.rs`
pub const ATTACHMENT_EXTENSION_LEN: usize = 3;

/// Status returned by the page creation endpoint on success.
pub const NOTION_SUCCESS_STATUS: u16 = 200;

/// Status returned by the image host once it has stored an upload.
pub const IMAGE_HOST_ACCEPTED_STATUS: u16 = 202;

/// Multipart field carrying the uploaded bytes.
pub const UPLOAD_FIELD_NAME: &str = "file";

pub const DEFAULT_NOTION_API_URL: &str = "https://api.notion.com/v1";
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";
pub const DEFAULT_INPUT_DIR: &str = "keep-data";
