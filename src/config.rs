use std::env;

use anyhow::Result;

/// Which word segmentation backend to use.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmenterBackend {
    /// Dictionary-based Chinese segmentation (default), for CJK text with
    /// no whitespace word boundaries
    Jieba,
    /// Plain whitespace splitting, for pre-segmented or Latin-only text
    Whitespace,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Which segmenter to use (default: Jieba)
    pub segmenter_backend: SegmenterBackend,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let segmenter_backend = match env::var("CARBON_SEGMENTER").as_deref() {
            Ok("whitespace") => SegmenterBackend::Whitespace,
            // "jieba" or unset both default to the dictionary segmenter
            _ => SegmenterBackend::Jieba,
        };

        Ok(Self { segmenter_backend })
    }
}
