use super::segmenter::segment_content;
use super::types::{Clock, SrtGeneration, TimedBlock, TopicTimelineEntry};
use crate::config::TimingConfig;
use crate::timestamps::next_topic_start;
use crate::topics::Topic;
use log::{debug, info};

/// Block sink that advances both clocks as blocks are emitted
struct Timeline<'a> {
    config: &'a TimingConfig,
    clock: Clock,
    blocks: Vec<TimedBlock>,
}

impl<'a> Timeline<'a> {
    fn new(config: &'a TimingConfig) -> Self {
        Self {
            config,
            clock: Clock::default(),
            blocks: Vec::new(),
        }
    }

    fn emit(&mut self, text: String, duration: f64) {
        let start = self.clock.srt_time;
        self.blocks.push(TimedBlock {
            index: self.clock.counter,
            start,
            end: start + duration,
            text,
        });
        self.clock.counter += 1;
        self.clock.srt_time += duration + self.config.block_interval;
        // padding never reaches the real clock
        self.clock.real_time += duration;
    }

    fn align_next_topic(&mut self) {
        self.clock.srt_time = next_topic_start(self.clock.srt_time, self.config.topic_interval);
    }
}

/// Generate a complete subtitle track from topics.
///
/// With `include_titles` each topic opens with a `"{number}. {title}..."`
/// block shown for `title_duration`. Content blocks are shown for
/// `block_duration`. Every topic after the first starts on a minute
/// boundary of the subtitle clock plus `topic_interval`.
pub fn generate_srt(topics: &[Topic], include_titles: bool, config: &TimingConfig) -> SrtGeneration {
    let mut timeline = Timeline::new(config);
    let mut entries = Vec::with_capacity(topics.len());

    for (position, topic) in topics.iter().enumerate() {
        let topic_start = timeline.clock.real_time;
        let first_block = timeline.blocks.len();

        if include_titles {
            timeline.emit(
                format!("{}. {}...", topic.number, topic.title),
                config.title_duration,
            );
        }

        for text in segment_content(&topic.content, config) {
            timeline.emit(text, config.block_duration);
        }

        debug!(
            "Topic {} '{}': {} blocks, real start {:.1}s, srt clock {:.1}s",
            topic.number,
            topic.title,
            timeline.blocks.len() - first_block,
            topic_start,
            timeline.clock.srt_time
        );

        entries.push(TopicTimelineEntry {
            number: topic.number,
            title: topic.title.clone(),
            real_time: topic_start,
        });

        if position + 1 < topics.len() {
            timeline.align_next_topic();
        }
    }

    info!(
        "Generated {} subtitle blocks for {} topics",
        timeline.blocks.len(),
        topics.len()
    );

    SrtGeneration {
        blocks: timeline.blocks,
        topics: entries,
        clock: timeline.clock,
    }
}
