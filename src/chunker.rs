//! Sliding-window text chunking for knowledge base content.

/// Window size applied when a record's content has to be split.
pub const DEFAULT_CHUNK_SIZE: usize = 500;
/// Characters shared between consecutive windows.
pub const DEFAULT_CHUNK_OVERLAP: usize = 50;

/// Splits long texts into bounded overlapping windows.
///
/// Sizes are measured in characters, not bytes, so multi-byte text never
/// splits inside a code point.
#[derive(Debug, Clone)]
pub struct TextChunker {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl TextChunker {
    /// Creates a chunker with the given window size and overlap.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        debug_assert!(
            chunk_overlap < chunk_size,
            "overlap must be smaller than the window size"
        );
        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    /// Splits `text` into windows of at most `chunk_size` characters.
    ///
    /// Text at or under the window size comes back as a single chunk.
    /// Longer text advances by `chunk_size - chunk_overlap` characters per
    /// window, so consecutive windows share exactly `chunk_overlap`
    /// characters.
    pub fn split(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let chars: Vec<char> = text.chars().collect();
        if chars.len() <= self.chunk_size {
            return vec![text.to_string()];
        }

        let step = self.chunk_size - self.chunk_overlap;
        let mut chunks = Vec::new();
        let mut start = 0;
        loop {
            let end = usize::min(start + self.chunk_size, chars.len());
            chunks.push(chars[start..end].iter().collect());
            if end == chars.len() {
                break;
            }
            start += step;
        }
        chunks
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }
}

impl Default for TextChunker {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE, DEFAULT_CHUNK_OVERLAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_no_chunks() {
        let chunker = TextChunker::default();
        assert!(chunker.split("").is_empty());
    }

    #[test]
    fn test_short_text_is_a_single_chunk() {
        let chunker = TextChunker::default();
        let chunks = chunker.split("WarrantyPolicy: 1 year");
        assert_eq!(chunks, vec!["WarrantyPolicy: 1 year".to_string()]);
    }

    #[test]
    fn test_text_at_window_size_is_a_single_chunk() {
        let chunker = TextChunker::default();
        let text = "x".repeat(DEFAULT_CHUNK_SIZE);
        assert_eq!(chunker.split(&text).len(), 1);
    }

    #[test]
    fn test_text_one_over_window_size_splits_in_two() {
        let chunker = TextChunker::default();
        let text: String = ('a'..='z').cycle().take(501).collect();
        let chunks = chunker.split(&text);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chars().count(), 500);
        assert_eq!(chunks[1].chars().count(), 51);
    }

    #[test]
    fn test_consecutive_windows_share_the_overlap() {
        let chunker = TextChunker::default();
        let text: String = ('a'..='z').cycle().take(1000).collect();
        let chunks = chunker.split(&text);

        assert_eq!(chunks.len(), 3);
        for pair in chunks.windows(2) {
            let tail: String = pair[0].chars().skip(pair[0].chars().count() - 50).collect();
            let head: String = pair[1].chars().take(50).collect();
            assert_eq!(tail, head);
        }
    }

    #[test]
    fn test_window_count_lower_bound() {
        let chunker = TextChunker::default();
        for len in [501, 950, 951, 1000, 2345] {
            let text: String = ('a'..='z').cycle().take(len).collect();
            let chunks = chunker.split(&text);

            // ceil((len - overlap) / step) windows at minimum
            let expected = (len - 50).div_ceil(450);
            assert!(chunks.len() >= expected, "len {len}: {} chunks", chunks.len());
            assert!(chunks.iter().all(|c| c.chars().count() <= 500));
        }
    }

    #[test]
    fn test_multibyte_text_never_splits_a_code_point() {
        let chunker = TextChunker::new(10, 3);
        let text = "日本語のテキストを分割しても文字が壊れないことを確認する".repeat(4);
        let chunks = chunker.split(&text);

        assert!(chunks.len() > 1);
        let reassembled: String = chunks
            .iter()
            .enumerate()
            .map(|(i, c)| {
                if i == 0 {
                    c.clone()
                } else {
                    c.chars().skip(3).collect()
                }
            })
            .collect();
        assert_eq!(reassembled, text);
    }
}
