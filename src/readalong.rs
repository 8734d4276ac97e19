//! Read-along word timing
//!
//! Maps narration text onto a known audio duration so a caller can highlight
//! the word being spoken. The narrated duration is divided across words
//! proportionally to word length, with a fixed per-word floor so short words
//! stay visible and a pause weight after sentence punctuation.
//!
//! Deterministic and timer-free: the schedule is computed once, and the
//! cursor answers "which word at time t" from the precomputed offsets.

use crate::error::{Error, Result};

// Weighting knobs: every word gets the floor, plus one unit per character,
// plus a pause after sentence-final punctuation.
const WORD_FLOOR_WEIGHT: f64 = 2.0;
const PUNCTUATION_PAUSE_WEIGHT: f64 = 3.0;

/// One word with its slot on the narration clock.
#[derive(Debug, Clone, PartialEq)]
pub struct WordTiming {
    /// The word as it appeared in the text
    pub word: String,

    /// Slot start, seconds from narration start
    pub start_seconds: f64,

    /// Slot length in seconds
    pub duration_seconds: f64,
}

impl WordTiming {
    /// Slot end, seconds from narration start.
    pub fn end_seconds(&self) -> f64 {
        self.start_seconds + self.duration_seconds
    }
}

/// Word-by-word schedule covering one narrated duration.
#[derive(Debug, Clone)]
pub struct ReadAlongSchedule {
    words: Vec<WordTiming>,
    total_seconds: f64,
}

impl ReadAlongSchedule {
    /// Allocate `total_seconds` across the words of `text`.
    ///
    /// Whitespace delimits words; empty text yields an empty schedule.
    pub fn build(text: &str, total_seconds: f64) -> Result<Self> {
        if !total_seconds.is_finite() || total_seconds < 0.0 {
            return Err(Error::Config(format!(
                "Narration duration must be non-negative, got {}",
                total_seconds
            )));
        }

        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.is_empty() {
            return Ok(Self {
                words: Vec::new(),
                total_seconds,
            });
        }

        let weights: Vec<f64> = tokens.iter().map(|word| word_weight(word)).collect();
        let total_weight: f64 = weights.iter().sum();

        let mut words = Vec::with_capacity(tokens.len());
        let mut cursor = 0.0f64;
        for (word, weight) in tokens.iter().zip(&weights) {
            let duration = total_seconds * weight / total_weight;
            words.push(WordTiming {
                word: (*word).to_string(),
                start_seconds: cursor,
                duration_seconds: duration,
            });
            cursor += duration;
        }

        Ok(Self {
            words,
            total_seconds,
        })
    }

    /// The scheduled words, in text order.
    pub fn words(&self) -> &[WordTiming] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the text had no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Duration the schedule covers, in seconds.
    pub fn total_seconds(&self) -> f64 {
        self.total_seconds
    }

    /// Index of the word active at `elapsed_seconds`.
    ///
    /// `None` before the start and once narration has finished.
    pub fn word_at(&self, elapsed_seconds: f64) -> Option<usize> {
        if elapsed_seconds < 0.0 || elapsed_seconds >= self.total_seconds || self.words.is_empty() {
            return None;
        }

        // Last slot whose start is at or before the elapsed time
        let index = self
            .words
            .partition_point(|w| w.start_seconds <= elapsed_seconds)
            .saturating_sub(1);
        Some(index)
    }
}

fn word_weight(word: &str) -> f64 {
    let mut weight = WORD_FLOOR_WEIGHT + word.chars().count() as f64;
    if word.ends_with(['.', ',', ';', ':', '!', '?']) {
        weight += PUNCTUATION_PAUSE_WEIGHT;
    }
    weight
}
