// Dictionary-based Chinese word segmentation, the default backend.
//
// Uses the `jieba-rs` crate with its bundled dictionary. CJK runs come out
// as dictionary-recognized words rather than single characters or whole
// unbroken runs, while whitespace-delimited Latin words pass through intact.

use jieba_rs::Jieba;

use super::traits::Segmenter;

pub struct JiebaSegmenter {
    jieba: Jieba,
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        // Loads the bundled dictionary; one instance serves both documents
        // of the comparison.
        Self { jieba: Jieba::new() }
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        self.jieba
            .cut(text, true)
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
