use crate::timestamps::format_srt_timestamp;
use serde::Serialize;

/// One timed subtitle entry. Times are on the subtitle clock, in seconds.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TimedBlock {
    /// 1-based sequence number, unique across the whole track
    pub index: u32,
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl TimedBlock {
    /// SRT entry without the trailing blank separator line
    pub fn to_srt_entry(&self) -> String {
        format!(
            "{}\n{} --> {}\n{}",
            self.index,
            format_srt_timestamp(self.start),
            format_srt_timestamp(self.end),
            self.text
        )
    }
}

/// Where a topic starts on the real (unpadded) clock
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TopicTimelineEntry {
    pub number: usize,
    pub title: String,
    pub real_time: f64,
}

/// Counters threaded through one generation run.
///
/// `srt_time` includes block and topic padding, `real_time` only counts
/// displayed durations, so the two drift apart as blocks are emitted.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Clock {
    /// Sequence number the next block will get
    pub counter: u32,
    pub srt_time: f64,
    pub real_time: f64,
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            counter: 1,
            srt_time: 0.0,
            real_time: 0.0,
        }
    }
}

/// Result of one subtitle generation request
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SrtGeneration {
    pub blocks: Vec<TimedBlock>,
    pub topics: Vec<TopicTimelineEntry>,
    /// Clock state after the last block
    pub clock: Clock,
}

impl SrtGeneration {
    /// Complete SRT document
    pub fn srt(&self) -> String {
        super::writer::render_srt(&self.blocks)
    }

    /// Timestamp list for video descriptions
    pub fn timestamps(&self) -> String {
        super::writer::generate_timestamps(&self.topics)
    }
}
