//! Document chunking strategies.
//!
//! This module provides the [`Chunker`] trait and two implementations:
//!
//! - [`FixedWindowChunker`] — consecutive windows of `max_size` characters
//! - [`SentenceChunker`] — sentence-aware greedy packing, preferred when
//!   splitting mid-sentence would hurt retrieval context
//!
//! Sentence boundaries come from a [`SentenceSegmenter`] collaborator;
//! [`PunctuationSegmenter`] is the built-in default.

use crate::document::Chunk;

/// A strategy for splitting extracted text into ordered chunks.
///
/// Implementations produce [`Chunk`]s with contiguous 1-based ordinals in
/// source order. Empty or whitespace-only input yields an empty `Vec`,
/// never an error.
pub trait Chunker: Send + Sync {
    /// Split `text` into chunks of at most `max_size` characters each
    /// (except where a strategy documents otherwise).
    fn chunk(&self, text: &str) -> Vec<Chunk>;
}

fn push_chunk(chunks: &mut Vec<Chunk>, text: String) {
    if text.trim().is_empty() {
        return;
    }
    chunks.push(Chunk { ordinal: chunks.len() + 1, text });
}

/// Splits text into consecutive windows of exactly `max_size` characters
/// (the final window may be shorter).
///
/// Windows neither overlap nor skip: concatenating the chunks restores the
/// input character sequence, minus any windows that were pure whitespace.
/// Sizes are counted in `char`s, so a window boundary can never split a
/// code point.
#[derive(Debug, Clone)]
pub struct FixedWindowChunker {
    max_size: usize,
}

impl FixedWindowChunker {
    /// Create a chunker with the given window size in characters.
    ///
    /// A zero window size yields no chunks.
    pub fn new(max_size: usize) -> Self {
        Self { max_size }
    }
}

impl Chunker for FixedWindowChunker {
    fn chunk(&self, text: &str) -> Vec<Chunk> {
        if self.max_size == 0 || text.trim().is_empty() {
            return Vec::new();
        }

        let mut chunks = Vec::new();
        let mut window = String::new();
        let mut window_chars = 0;

        for ch in text.chars() {
            window.push(ch);
            window_chars += 1;
            if window_chars == self.max_size {
                push_chunk(&mut chunks, std::mem::take(&mut window));
                window_chars = 0;
            }
        }
        if window_chars > 0 {
            push_chunk(&mut chunks, window);
        }

        chunks
    }
}

/// Detects sentence boundaries in a block of text.
///
/// Kept behind a trait so a smarter segmenter (a tokenizer model, a
/// language-specific library) can be swapped in without touching the
/// chunker.
pub trait SentenceSegmenter: Send + Sync {
    /// Split `text` into an ordered list of trimmed, non-empty sentences.
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Splits on sentence terminators (`.`, `!`, `?`) followed by whitespace
/// or end of input, keeping the terminator with its sentence.
///
/// A terminator inside a token ("10.5%", "p.a.") does not split because it
/// is not followed by whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationSegmenter;

impl SentenceSegmenter for PunctuationSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            current.push(ch);
            if matches!(ch, '.' | '!' | '?')
                && chars.peek().is_none_or(|next| next.is_whitespace())
            {
                let sentence = current.trim();
                if !sentence.is_empty() {
                    sentences.push(sentence.to_string());
                }
                current.clear();
            }
        }

        let tail = current.trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }
        sentences
    }
}

/// Packs sentences greedily into chunks of at most `max_size` characters.
///
/// Sentences come from the configured [`SentenceSegmenter`]. When appending
/// the next sentence (plus a joining space) would push the running buffer
/// past `max_size`, the buffer closes as a chunk and the sentence starts a
/// new one. A single sentence longer than `max_size` becomes its own
/// oversized chunk — sentences are never cut.
pub struct SentenceChunker {
    max_size: usize,
    segmenter: Box<dyn SentenceSegmenter>,
}

impl SentenceChunker {
    /// Create a sentence-aware chunker with the built-in
    /// [`PunctuationSegmenter`].
    pub fn new(max_size: usize) -> Self {
        Self::with_segmenter(max_size, Box::new(PunctuationSegmenter))
    }

    /// Create a sentence-aware chunker with a custom segmenter.
    pub fn with_segmenter(max_size: usize, segmenter: Box<dyn SentenceSegmenter>) -> Self {
        Self { max_size, segmenter }
    }
}

impl Chunker for SentenceChunker {
    fn chunk(&self, text: &str) -> Vec<Chunk> {
        if self.max_size == 0 || text.trim().is_empty() {
            return Vec::new();
        }

        let mut chunks = Vec::new();
        let mut buffer = String::new();
        let mut buffer_chars = 0;

        for sentence in self.segmenter.segment(text) {
            let sentence_chars = sentence.chars().count();

            if buffer.is_empty() {
                buffer = sentence;
                buffer_chars = sentence_chars;
            } else if buffer_chars + 1 + sentence_chars <= self.max_size {
                buffer.push(' ');
                buffer.push_str(&sentence);
                buffer_chars += 1 + sentence_chars;
            } else {
                push_chunk(&mut chunks, std::mem::replace(&mut buffer, sentence));
                buffer_chars = sentence_chars;
            }
        }

        if !buffer.is_empty() {
            push_chunk(&mut chunks, buffer);
        }

        chunks
    }
}
