use actix_multipart::form::{tempfile::TempFile, MultipartForm};

/// Multipart form of POST /fs/file
#[derive(MultipartForm)]
pub struct UploadForm {
    /// The uploaded file; its file name is the target path
    #[multipart(limit = "1MB")]
    pub file: TempFile,
}

impl UploadForm {
    /// Target path taken from the part's file name
    pub fn target_path(&self) -> Result<&str, String> {
        match self.file.file_name.as_deref() {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err("Missing file name".to_string()),
        }
    }
}
