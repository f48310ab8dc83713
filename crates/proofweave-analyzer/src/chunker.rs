//! `TextChunker` (§4.A): slices source text at sentence boundaries into
//! recognizer-safe chunks, preserving exact substrings so downstream
//! offset-based annotation remains valid.

use unicode_segmentation::UnicodeSegmentation;

pub struct TextChunker {
    max_chars: usize,
}

impl TextChunker {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars: max_chars.max(1) }
    }

    /// Split `text` into chunks no longer than `max_chars`, breaking only at
    /// sentence boundaries. A single sentence longer than `max_chars` is
    /// kept whole rather than split mid-word. Chunks are contiguous,
    /// non-overlapping substrings of `text` that reconstruct it exactly.
    pub fn chunk<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let sentences: Vec<&str> = text.unicode_sentences().collect();
        if sentences.is_empty() {
            return Vec::new();
        }

        let base = text.as_ptr() as usize;
        let mut chunks = Vec::new();
        let mut chunk_start = 0usize;
        let mut chunk_len = 0usize;

        for sentence in &sentences {
            let offset = sentence.as_ptr() as usize - base;
            let end = offset + sentence.len();
            if chunk_len > 0 && end - chunk_start > self.max_chars {
                chunks.push(&text[chunk_start..offset]);
                chunk_start = offset;
            }
            chunk_len = end - chunk_start;
        }
        chunks.push(&text[chunk_start..]);
        chunks
    }
}
