mod types;
mod utils;

pub use types::TimeComponents;
pub use utils::{
    format_short_timestamp, format_srt_timestamp, format_timestamp_line, next_topic_start,
    to_components,
};

#[cfg(test)]
pub mod unit_test;
