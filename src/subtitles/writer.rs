use super::types::{TimedBlock, TopicTimelineEntry};
use crate::timestamps::format_timestamp_line;
use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Render blocks as an SRT document, entries separated by one blank line
pub fn render_srt(blocks: &[TimedBlock]) -> String {
    blocks
        .iter()
        .map(TimedBlock::to_srt_entry)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One `"{M:SS} - {number}. {title}"` line per topic
pub fn generate_timestamps(entries: &[TopicTimelineEntry]) -> String {
    entries
        .iter()
        .map(|entry| format_timestamp_line(entry.real_time, entry.number, &entry.title))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write an SRT document as UTF-8 into `dir`.
pub fn write_srt_file<P: AsRef<Path>>(dir: P, filename: &str, srt: &str) -> io::Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    fs::write(&path, srt)?;
    info!("Wrote {} bytes of subtitles to {}", srt.len(), path.display());
    Ok(path)
}
