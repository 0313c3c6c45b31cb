//! Fixed-window chunk splitter

use docchat_core::{Chunk, DocumentPage, Result, SplitConfig};

/// Splits page text into overlapping fixed-size windows.
///
/// Windows are measured in `char`s, never bytes, so multi-byte text cannot
/// be cut mid-character. Consecutive windows within a page overlap by
/// `chunk_overlap`; windows never span page boundaries.
pub struct TextSplitter {
    config: SplitConfig,
}

impl TextSplitter {
    /// Create a splitter, validating the overlap < size invariant
    pub fn new(config: SplitConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Split every page into chunks with a document-global chunk index
    pub fn split_pages(&self, pages: &[DocumentPage]) -> Vec<Chunk> {
        let mut chunks = Vec::new();

        for page in pages {
            for window in self.split_text(&page.content) {
                chunks.push(Chunk {
                    content: window,
                    page: page.number,
                    index: chunks.len(),
                });
            }
        }

        chunks
    }

    /// Window a single text: full windows of `chunk_size`, each starting
    /// `chunk_size - chunk_overlap` after the previous one
    fn split_text(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        if chars.iter().all(|c| c.is_whitespace()) {
            return Vec::new();
        }

        let mut windows = Vec::new();
        let mut start = 0;

        while start < chars.len() {
            let end = (start + self.config.chunk_size).min(chars.len());
            windows.push(chars[start..end].iter().collect());

            if end >= chars.len() {
                break;
            }

            start = end - self.config.chunk_overlap;
        }

        windows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn splitter(size: usize, overlap: usize) -> TextSplitter {
        TextSplitter::new(SplitConfig {
            chunk_size: size,
            chunk_overlap: overlap,
        })
        .unwrap()
    }

    fn page(number: usize, content: &str) -> DocumentPage {
        DocumentPage {
            number,
            content: content.to_string(),
        }
    }

    fn expected_count(len: usize, size: usize, overlap: usize) -> usize {
        if len <= size {
            1
        } else {
            (len - overlap).div_ceil(size - overlap)
        }
    }

    #[test]
    fn chunk_count_matches_window_formula() {
        for (len, size, overlap) in [
            (2000, 1000, 150),
            (1001, 1000, 150),
            (5000, 1000, 150),
            (999, 100, 30),
            (100, 100, 30),
        ] {
            let text = "a".repeat(len);
            let chunks = splitter(size, overlap).split_pages(&[page(1, &text)]);
            assert_eq!(
                chunks.len(),
                expected_count(len, size, overlap),
                "len={} size={} overlap={}",
                len,
                size,
                overlap
            );
        }
    }

    #[test]
    fn splitting_is_deterministic() {
        let text: String = ("lorem ipsum dolor sit amet ").repeat(80);
        let first = splitter(200, 40).split_pages(&[page(1, &text)]);
        let second = splitter(200, 40).split_pages(&[page(1, &text)]);
        assert_eq!(first, second);
    }

    #[test]
    fn page_shorter_than_window_yields_single_chunk() {
        let chunks = splitter(1000, 150).split_pages(&[page(1, "short page")]);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "short page");
        assert_eq!(chunks[0].page, 1);
    }

    #[test]
    fn consecutive_windows_share_the_overlap() {
        let text: String = (0..600).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
        let chunks = splitter(200, 50).split_pages(&[page(1, &text)]);

        for pair in chunks.windows(2) {
            let tail: String = pair[0].content.chars().skip(200 - 50).collect();
            let head: String = pair[1].content.chars().take(50).collect();
            assert_eq!(tail, head);
        }
    }

    #[test]
    fn windows_cover_the_full_text() {
        let text: String = (0..777).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
        let chunks = splitter(100, 25).split_pages(&[page(1, &text)]);

        let mut rebuilt: String = chunks[0].content.clone();
        for chunk in &chunks[1..] {
            let fresh: String = chunk.content.chars().skip(25).collect();
            rebuilt.push_str(&fresh);
        }
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn blank_pages_yield_no_chunks_and_indices_stay_global() {
        let pages = vec![
            page(1, "first page text"),
            page(2, "   \n  "),
            page(3, "third page text"),
        ];
        let chunks = splitter(1000, 150).split_pages(&pages);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].page, 1);
        assert_eq!(chunks[0].index, 0);
        assert_eq!(chunks[1].page, 3);
        assert_eq!(chunks[1].index, 1);
    }

    #[test]
    fn windows_do_not_span_page_boundaries() {
        let pages = vec![page(1, &"a".repeat(150)), page(2, &"b".repeat(150))];
        let chunks = splitter(200, 50).split_pages(&pages);

        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].content.chars().all(|c| c == 'a'));
        assert!(chunks[1].content.chars().all(|c| c == 'b'));
    }
}
