use crate::timestamps::{
    format_short_timestamp, format_srt_timestamp, format_timestamp_line, next_topic_start,
    to_components, TimeComponents,
};

#[test]
fn test_components_floor_each_field() {
    assert_eq!(
        to_components(3725.5),
        TimeComponents {
            hours: 1,
            minutes: 2,
            seconds: 5,
            milliseconds: 500,
        }
    );
    assert_eq!(to_components(0.0), TimeComponents::default());
    assert_eq!(to_components(59.9999).seconds, 59);
    assert_eq!(to_components(59.9999).milliseconds, 999);
}

#[test]
fn test_invalid_inputs_clamp_to_zero() {
    assert_eq!(to_components(-4.0), TimeComponents::default());
    assert_eq!(to_components(f64::NAN), TimeComponents::default());
    assert_eq!(format_srt_timestamp(f64::INFINITY), "00:00:00,000");
}

#[test]
fn test_format_srt_timestamp() {
    assert_eq!(format_srt_timestamp(0.0), "00:00:00,000");
    assert_eq!(format_srt_timestamp(35.0), "00:00:35,000");
    assert_eq!(format_srt_timestamp(4.5), "00:00:04,500");
    assert_eq!(format_srt_timestamp(4.125), "00:00:04,125");
    assert_eq!(format_srt_timestamp(3725.25), "01:02:05,250");
    assert_eq!(format_srt_timestamp(36000.0), "10:00:00,000");
}

#[test]
fn test_format_short_timestamp() {
    assert_eq!(format_short_timestamp(0.0), "0:00");
    assert_eq!(format_short_timestamp(65.0), "1:05");
    assert_eq!(format_short_timestamp(600.0), "10:00");
    assert_eq!(format_short_timestamp(3599.9), "59:59");
    assert_eq!(format_short_timestamp(3600.0), "1:00:00");
    assert_eq!(format_short_timestamp(7384.0), "2:03:04");
}

#[test]
fn test_next_topic_start_aligns_to_minute_plus_interval() {
    assert_eq!(next_topic_start(0.0, 60.0), 60.0);
    assert_eq!(next_topic_start(1.0, 60.0), 120.0);
    assert_eq!(next_topic_start(60.0, 60.0), 120.0);
    assert_eq!(next_topic_start(130.0, 60.0), 240.0);
    assert_eq!(next_topic_start(130.0, 0.0), 180.0);
}

#[test]
fn test_timestamp_line() {
    assert_eq!(format_timestamp_line(0.0, 1, "Intro"), "0:00 - 1. Intro");
    assert_eq!(format_timestamp_line(3661.0, 12, "Deep dive"), "1:01:01 - 12. Deep dive");
}
