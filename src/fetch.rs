use crate::search::{ImageApi, SearchRequest};
use crate::utils::files::ensure_output_dir;
use crate::utils::images::{download_progress, download_search_images};
use std::fmt;
use tracing::{info, warn};

pub const DEFAULT_OUTPUT_DIR: &str = "./downloaded_images";

/// Result of one fetch run, rendered as the report string
#[derive(Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The search call failed; carries the reason (usually the status code)
    ApiError(String),
    NoImages,
    NoneDownloaded,
    Saved {
        output_dir: String,
        paths: Vec<String>,
    },
}

impl fmt::Display for FetchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchOutcome::ApiError(reason) => {
                write!(f, "Error: Unable to fetch images. {}", reason)
            }
            FetchOutcome::NoImages => f.write_str("No images found."),
            FetchOutcome::NoneDownloaded => f.write_str("Failed to download any images."),
            FetchOutcome::Saved { output_dir, paths } => write!(
                f,
                "Images saved to {}. Paths: {}",
                output_dir,
                paths.join(", ")
            ),
        }
    }
}

pub struct FetchOptions {
    pub output_dir: String,
    pub show_progress: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            show_progress: false,
        }
    }
}

/// Search for `summary` and download the results into the output directory.
///
/// Every failure ends up in the returned outcome or in a warning log line;
/// nothing is propagated to the caller.
pub async fn fetch_images(
    api: &dyn ImageApi,
    summary: &str,
    options: &FetchOptions,
) -> FetchOutcome {
    let output_dir = options.output_dir.as_str();

    // Writes into an unusable directory fail per item later on
    if let Err(e) = ensure_output_dir(output_dir) {
        warn!("Could not prepare {}: {}", output_dir, e);
    }

    info!("Searching images for: {}", summary);
    let response = match api.search(&SearchRequest::new(summary)).await {
        Ok(response) => response,
        Err(e) => return FetchOutcome::ApiError(e.to_string()),
    };

    let items = response.into_images();
    if items.is_empty() {
        return FetchOutcome::NoImages;
    }
    info!("Found {} images", items.len());

    let pb = download_progress(items.len(), options.show_progress);
    let paths = download_search_images(api, &items, output_dir, &pb).await;

    if paths.is_empty() {
        FetchOutcome::NoneDownloaded
    } else {
        info!("Downloaded {} of {} images", paths.len(), items.len());
        FetchOutcome::Saved {
            output_dir: output_dir.to_string(),
            paths,
        }
    }
}

/// Report string form of [`fetch_images`]
pub async fn fetch(api: &dyn ImageApi, summary: &str, options: &FetchOptions) -> String {
    fetch_images(api, summary, options).await.to_string()
}
