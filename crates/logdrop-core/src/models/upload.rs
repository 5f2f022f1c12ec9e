use crate::constants::ARTIFACT_EXTENSION;
use crate::error::AppError;

/// One log upload, assembled part by part from a multipart request.
///
/// The struct itself is never persisted; only `file_data` ends up on disk,
/// under a name derived from the three metadata fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadRequest {
    pub project_name: String,
    pub branch: String,
    pub commit: String,
    pub file_data: Vec<u8>,
}

impl UploadRequest {
    /// Check required metadata in the order commit, branch, project name.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.commit.is_empty() {
            return Err(AppError::MissingField("commit"));
        }
        if self.branch.is_empty() {
            return Err(AppError::MissingField("branch"));
        }
        if self.project_name.is_empty() {
            return Err(AppError::MissingField("project name"));
        }
        Ok(())
    }

    /// `<project>_<branch>_<commit>.log`
    ///
    /// The result is built from uploader-controlled values and must go
    /// through the storage path sanitizer before touching the filesystem.
    pub fn artifact_file_name(&self) -> String {
        format!(
            "{}_{}_{}.{}",
            self.project_name, self.branch, self.commit, ARTIFACT_EXTENSION
        )
    }

    pub fn has_file_data(&self) -> bool {
        !self.file_data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> UploadRequest {
        UploadRequest {
            project_name: "api".to_string(),
            branch: "main".to_string(),
            commit: "3f2a9c1".to_string(),
            file_data: b"build ok".to_vec(),
        }
    }

    #[test]
    fn test_validate_complete_request() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn test_validate_checks_commit_first() {
        let request = UploadRequest::default();
        match request.validate() {
            Err(AppError::MissingField(field)) => assert_eq!(field, "commit"),
            other => panic!("Expected MissingField(commit), got {:?}", other),
        }
    }

    #[test]
    fn test_validate_checks_branch_before_project() {
        let request = UploadRequest {
            commit: "abc".to_string(),
            ..Default::default()
        };
        let err = request.validate().unwrap_err();
        assert_eq!(err.to_string(), "branch should not be empty");
    }

    #[test]
    fn test_validate_reports_project_name() {
        let request = UploadRequest {
            project_name: String::new(),
            ..complete()
        };
        let err = request.validate().unwrap_err();
        assert_eq!(err.to_string(), "project name should not be empty");
    }

    #[test]
    fn test_validate_ignores_file_data() {
        let request = UploadRequest {
            file_data: Vec::new(),
            ..complete()
        };
        assert!(request.validate().is_ok());
        assert!(!request.has_file_data());
    }

    #[test]
    fn test_artifact_file_name() {
        assert_eq!(complete().artifact_file_name(), "api_main_3f2a9c1.log");
    }
}
