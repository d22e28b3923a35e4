use std::path::Path;

use chrono::Utc;
use rand::Rng;
use tokio::fs;

use crate::config::upload::UploadConfig;
use crate::utils::errors::AppError;

/// Build a collision-resistant stored filename for an upload.
///
/// Keeps the original extension, replaces the rest with a timestamp plus
/// a random suffix. There is no transactional link between the file write
/// and the submission row referencing it.
pub fn unique_filename(field_name: &str, original_name: &str) -> String {
    let extension = Path::new(original_name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);

    format!(
        "{}-{}-{}{}",
        field_name,
        Utc::now().timestamp_millis(),
        suffix,
        extension
    )
}

/// Write upload bytes into the configured upload directory and return the
/// relative path stored on the submission row (and served at `/uploads`).
pub async fn store_upload(
    config: &UploadConfig,
    field_name: &str,
    original_name: &str,
    data: &[u8],
) -> Result<String, AppError> {
    let filename = unique_filename(field_name, original_name);
    let path = config.dir.join(&filename);

    fs::create_dir_all(&config.dir)
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create upload dir: {}", e)))?;
    fs::write(&path, data)
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to store upload: {}", e)))?;

    Ok(format!("uploads/{}", filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_filename_keeps_extension() {
        let name = unique_filename("file", "report.pdf");
        assert!(name.starts_with("file-"));
        assert!(name.ends_with(".pdf"));
    }

    #[test]
    fn test_unique_filename_without_extension() {
        let name = unique_filename("file", "README");
        assert!(name.starts_with("file-"));
        assert!(!name.contains('.'));
    }

    #[test]
    fn test_unique_filenames_differ() {
        let a = unique_filename("file", "a.txt");
        let b = unique_filename("file", "a.txt");
        assert_ne!(a, b);
    }
}
