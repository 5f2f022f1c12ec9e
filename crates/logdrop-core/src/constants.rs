//! Constants shared across crates.

/// Multipart field carrying the project name.
pub const PROJECT_FIELD: &str = "project";

/// Multipart field carrying the branch name.
pub const BRANCH_FIELD: &str = "branch";

/// Multipart field carrying the commit identifier.
pub const COMMIT_FIELD: &str = "commit";

/// Multipart field carrying the raw log bytes.
pub const FILE_FIELD: &str = "file";

/// Upper bound for a single metadata (text) field value.
pub const TEXT_FIELD_MAX_BYTES: usize = 4096;

/// Extension given to every stored artifact.
pub const ARTIFACT_EXTENSION: &str = "log";

/// `chrono` format of the date-keyed subdirectory (YYYY-MM-DD).
pub const DATE_DIR_FORMAT: &str = "%Y-%m-%d";

/// Body returned by successful uploads and health checks.
pub const OK_BODY: &str = "OK";
