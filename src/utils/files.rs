use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Ensure the output directory exists, creating parents as needed
pub fn ensure_output_dir(output_dir: &str) -> io::Result<()> {
    let dir = Path::new(output_dir);
    if dir.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(dir)?;
    info!("Created directory: {}", dir.display());
    Ok(())
}

/// Path of the image at a 1-based result position
pub fn image_file_path(output_dir: &str, position: usize) -> PathBuf {
    Path::new(output_dir).join(format!("image_{}.jpg", position))
}
