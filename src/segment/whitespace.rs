// Whitespace segmentation, the trivial backend.
//
// For text that already has word boundaries: Latin scripts, or CJK text
// pre-segmented by an external tool. No dictionary load.

use super::traits::Segmenter;

pub struct WhitespaceSegmenter;

impl Segmenter for WhitespaceSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}
