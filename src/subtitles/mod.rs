mod generator;
mod segmenter;
mod types;
mod writer;

pub use generator::generate_srt;
pub use types::{Clock, SrtGeneration, TimedBlock, TopicTimelineEntry};
pub use writer::{generate_timestamps, render_srt, write_srt_file};

// Exports for testing
pub use segmenter::BlockBuffer;
