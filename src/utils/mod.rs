//! Utility modules for img-fetch
//!
//! - `files`: output directory and file naming
//! - `http`: HTTP client construction
//! - `images`: sequential image download loop

pub mod files;
pub mod http;
pub mod images;
