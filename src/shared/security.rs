use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum file size for security (100 MB)
/// This prevents DoS attacks via excessively large files
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// This combines existence check, symlink check, and file type check in one operation.
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "rules file", "licence file")
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Validates that `path` resolves to a location inside `root`
///
/// Both paths are canonicalized first, so `..` components and
/// symlinked parents cannot be used to escape the root.
///
/// # Errors
/// Returns an error if either path cannot be canonicalized or if
/// `path` lies outside `root`
pub fn validate_within_dir(path: &Path, root: &Path) -> Result<()> {
    let canonical_root = root
        .canonicalize()
        .map_err(|e| anyhow::anyhow!("Failed to resolve {}: {}", root.display(), e))?;
    let canonical_path = path
        .canonicalize()
        .map_err(|e| anyhow::anyhow!("Failed to resolve {}: {}", path.display(), e))?;

    if !canonical_path.starts_with(&canonical_root) {
        anyhow::bail!(
            "Security: {} is outside of {}",
            path.display(),
            root.display()
        );
    }

    Ok(())
}

/// Reads a text file after applying the regular-file and size checks
///
/// Invalid UTF-8 sequences are replaced rather than rejected; licence
/// files in the wild are not always clean UTF-8.
pub fn read_text_file(path: &Path, file_description: &str) -> Result<String> {
    validate_regular_file(path, file_description)?;

    let metadata = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;
    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

    let bytes = fs::read(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
