pub mod topics;
pub use topics::{extract_titles, parse_topics, remove_numbering, Topic};

pub mod timestamps;
pub use timestamps::{format_short_timestamp, format_srt_timestamp, next_topic_start};

pub mod subtitles;
pub use subtitles::{generate_srt, generate_timestamps, SrtGeneration, TimedBlock, TopicTimelineEntry};

pub mod list;
pub use list::generate_list;

pub mod export;
pub use export::{CsvDirSink, ExportItem, TableSink};

pub mod filename;

pub mod config;
pub use config::{Config, TimingConfig};

pub mod session;
pub use session::{Session, SessionOutput};

pub mod errors;
pub use errors::{Advisory, ConfigError, ExportError, ScriptHelperError, ScriptHelperResult};
