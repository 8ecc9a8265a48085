use super::types::TimeComponents;

/// Split a time in seconds into hours, minutes, seconds and milliseconds.
///
/// Negative, NaN and infinite inputs are treated as zero.
pub fn to_components(seconds: f64) -> TimeComponents {
    if seconds.is_nan() || seconds.is_infinite() || seconds < 0.0 {
        return TimeComponents::default();
    }

    TimeComponents {
        hours: (seconds / 3600.0).floor() as u64,
        minutes: ((seconds % 3600.0) / 60.0).floor() as u64,
        seconds: (seconds % 60.0).floor() as u64,
        milliseconds: ((seconds % 1.0) * 1000.0).floor() as u64,
    }
}

/// Format timestamp in SRT format (`HH:MM:SS,mmm`)
pub fn format_srt_timestamp(seconds: f64) -> String {
    let t = to_components(seconds);
    format!(
        "{:02}:{:02}:{:02},{:03}",
        t.hours, t.minutes, t.seconds, t.milliseconds
    )
}

/// Format timestamp for video descriptions: `M:SS`, or `H:MM:SS` from the first hour on
pub fn format_short_timestamp(seconds: f64) -> String {
    let t = to_components(seconds);
    if t.hours > 0 {
        format!("{}:{:02}:{:02}", t.hours, t.minutes, t.seconds)
    } else {
        format!("{}:{:02}", t.minutes, t.seconds)
    }
}

/// Start of the next topic on the subtitle clock: the end time rounded up to
/// a whole minute, plus `topic_interval`.
pub fn next_topic_start(current_end_time: f64, topic_interval: f64) -> f64 {
    (current_end_time / 60.0).ceil() * 60.0 + topic_interval
}

/// One line of the timestamp list, e.g. `1:05 - 2. Setup`
pub fn format_timestamp_line(seconds: f64, number: usize, title: &str) -> String {
    format!("{} - {}. {}", format_short_timestamp(seconds), number, title)
}
