use crate::error::Result;
use crate::search::{ImageApi, SearchItem};
use crate::utils::files::image_file_path;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::{debug, warn};

/// Progress bar for `len` downloads, or a hidden one when disabled
pub fn download_progress(len: usize, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}

async fn download_image(api: &dyn ImageApi, url: &str, target: &Path) -> Result<()> {
    let bytes = api.download(url).await?;
    tokio::fs::write(target, &bytes).await?;
    Ok(())
}

/// Download every item that carries a usable URL, one after another, into
/// `output_dir/image_<position>.jpg`. Positions come from the original result
/// order, so skipped or failed items leave gaps. Returns the written paths.
pub async fn download_search_images(
    api: &dyn ImageApi,
    items: &[SearchItem],
    output_dir: &str,
    pb: &ProgressBar,
) -> Vec<String> {
    let mut image_paths = Vec::new();

    for (idx, item) in items.iter().enumerate() {
        let position = idx + 1;

        let Some(url) = item.chosen_url() else {
            debug!("Result {} has no image URL, skipping", position);
            pb.inc(1);
            continue;
        };

        let target = image_file_path(output_dir, position);
        debug!("Downloading {} to {}", url, target.display());

        match download_image(api, url, &target).await {
            Ok(()) => image_paths.push(target.to_string_lossy().into_owned()),
            Err(e) => warn!("Failed to download image {}: {}", position, e),
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    image_paths
}
