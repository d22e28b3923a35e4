use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct UploadConfig {
    /// Directory where submitted files are written. Served read-only at
    /// `/uploads`.
    pub dir: PathBuf,
}

impl UploadConfig {
    pub fn from_env() -> Self {
        Self {
            dir: env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "uploads".to_string())
                .into(),
        }
    }
}
