//! Timeline planning
//!
//! Computes where every buffer lands on the render clock, in whole frames at
//! the 44.1kHz render rate. Speech segments run back-to-back in list order
//! with a fixed gap after each one; the music bed underlays the entire
//! duration. Two invariants come out of the plan:
//!
//! - no two speech segments ever overlap
//! - total duration = max(speech span including gaps, music duration), so
//!   the music is looped or truncated to fit, never the reverse

use crate::audio::{PcmBuffer, RENDER_SAMPLE_RATE};
use crate::error::{Error, Result};
use tracing::debug;

/// A speech buffer with its placement on the render clock.
#[derive(Debug, Clone)]
pub struct ScheduledSegment {
    /// First frame of the segment on the timeline
    pub start_frame: usize,

    /// Normalized segment audio
    pub buffer: PcmBuffer,
}

impl ScheduledSegment {
    /// One-past-the-last frame of the segment.
    pub fn end_frame(&self) -> usize {
        self.start_frame + self.buffer.frames()
    }
}

/// Complete placement plan for one mix.
#[derive(Debug, Clone)]
pub struct MixTimeline {
    /// Background music bed (looped via modulo indexing while rendering)
    pub music: PcmBuffer,

    /// Gain applied to every music sample
    pub music_gain: f32,

    /// Silence after each speech segment, in frames
    pub gap_frames: usize,

    /// Speech segments with start offsets, in playback order
    pub segments: Vec<ScheduledSegment>,

    /// Total length of the render, in frames
    pub total_frames: usize,
}

impl MixTimeline {
    /// Lay out speech buffers over the music bed.
    ///
    /// # Errors
    /// [`Error::NoSegments`] when `speech` is empty — with no narration there
    /// is nothing to mix, and the render stage must never run.
    pub fn plan(
        music: PcmBuffer,
        speech: Vec<PcmBuffer>,
        gap_seconds: f64,
        music_gain: f32,
    ) -> Result<Self> {
        if speech.is_empty() {
            return Err(Error::NoSegments);
        }

        let gap_frames = (gap_seconds * RENDER_SAMPLE_RATE as f64).round() as usize;

        let mut segments = Vec::with_capacity(speech.len());
        let mut cursor = 0usize;
        for buffer in speech {
            let frames = buffer.frames();
            segments.push(ScheduledSegment {
                start_frame: cursor,
                buffer,
            });
            cursor += frames + gap_frames;
        }

        let speech_frames = cursor;
        let total_frames = speech_frames.max(music.frames());

        debug!(
            "Timeline: {} segments over {} frames ({:.2}s), music {} frames, gap {} frames",
            segments.len(),
            total_frames,
            total_frames as f64 / RENDER_SAMPLE_RATE as f64,
            music.frames(),
            gap_frames
        );

        Ok(Self {
            music,
            music_gain,
            gap_frames,
            segments,
            total_frames,
        })
    }

    /// Total render duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.total_frames as f64 / RENDER_SAMPLE_RATE as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn silent_buffer(frames: usize) -> PcmBuffer {
        PcmBuffer::new(vec![0.0f32; frames * 2], RENDER_SAMPLE_RATE).unwrap()
    }

    fn seconds(s: f64) -> usize {
        (s * RENDER_SAMPLE_RATE as f64).round() as usize
    }

    #[test]
    fn test_plan_rejects_empty_speech() {
        let music = silent_buffer(seconds(5.0));
        let result = MixTimeline::plan(music, vec![], 1.0, 0.15);
        assert!(matches!(result, Err(Error::NoSegments)));
    }

    #[test]
    fn test_reference_scenario() {
        // music 5s, segments [3s, 2s], gap 1s -> total 7s,
        // segment 0 at t=0, segment 1 at t=4
        let music = silent_buffer(seconds(5.0));
        let speech = vec![silent_buffer(seconds(3.0)), silent_buffer(seconds(2.0))];

        let timeline = MixTimeline::plan(music, speech, 1.0, 0.15).unwrap();

        assert_eq!(timeline.total_frames, seconds(7.0));
        assert_eq!(timeline.segments[0].start_frame, 0);
        assert_eq!(timeline.segments[1].start_frame, seconds(4.0));
    }

    #[test]
    fn test_segments_never_overlap() {
        let music = silent_buffer(seconds(1.0));
        let speech = vec![
            silent_buffer(seconds(0.5)),
            silent_buffer(seconds(1.25)),
            silent_buffer(seconds(0.75)),
        ];

        let timeline = MixTimeline::plan(music, speech, 0.25, 0.15).unwrap();

        for pair in timeline.segments.windows(2) {
            assert!(
                pair[1].start_frame >= pair[0].end_frame() + timeline.gap_frames,
                "segments overlap: {} starts before {} + gap",
                pair[1].start_frame,
                pair[0].end_frame()
            );
        }
    }

    #[test]
    fn test_long_music_sets_total_duration() {
        // Music outlasts speech: speech ends first, music plays out in full
        let music = silent_buffer(seconds(10.0));
        let speech = vec![silent_buffer(seconds(2.0))];

        let timeline = MixTimeline::plan(music, speech, 1.0, 0.15).unwrap();
        assert_eq!(timeline.total_frames, seconds(10.0));
    }

    #[test]
    fn test_zero_gap() {
        let music = silent_buffer(seconds(1.0));
        let speech = vec![silent_buffer(seconds(1.0)), silent_buffer(seconds(1.0))];

        let timeline = MixTimeline::plan(music, speech, 0.0, 0.15).unwrap();
        assert_eq!(timeline.gap_frames, 0);
        assert_eq!(timeline.segments[1].start_frame, seconds(1.0));
        assert_eq!(timeline.total_frames, seconds(2.0));
    }
}
