use crate::config::Config;
use crate::errors::{Advisory, ScriptHelperResult};
use crate::export::{export_items_from_text, export_to_sink, TableSink};
use crate::filename::base_filename_for;
use crate::list::generate_list;
use crate::subtitles::{generate_srt, write_srt_file, SrtGeneration};
use crate::topics::{extract_titles, parse_topics_with_placeholder, Topic};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Rendered outputs of the last subtitle generation
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutput {
    pub srt: String,
    pub timestamps: String,
    pub generation: SrtGeneration,
}

/// Keeps the last parsed topics and subtitle track so they can be
/// regenerated when an option changes, or saved later.
#[derive(Debug)]
pub struct Session {
    config: Config,
    include_titles: bool,
    last_topics: Vec<Topic>,
    last_output: Option<SessionOutput>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            include_titles: true,
            last_topics: Vec::new(),
            last_output: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn include_titles(&self) -> bool {
        self.include_titles
    }

    pub fn topics(&self) -> &[Topic] {
        &self.last_topics
    }

    pub fn output(&self) -> Option<&SessionOutput> {
        self.last_output.as_ref()
    }

    /// Numbered title list for `text`.
    pub fn generate_list(&self, text: &str) -> ScriptHelperResult<String> {
        let titles = extract_titles(text, &self.config.parser.placeholder_title);
        if titles.is_empty() {
            warn!("{}", Advisory::NoTitlesFound);
            return Err(Advisory::NoTitlesFound.into());
        }
        info!("{} titles extracted", titles.len());
        Ok(generate_list(&titles))
    }

    /// Parse `text` and generate a subtitle track with the current options.
    ///
    /// When no topics are found the previous results are kept.
    pub fn generate_srt(&mut self, text: &str) -> ScriptHelperResult<&SessionOutput> {
        let topics = parse_topics_with_placeholder(text, &self.config.parser.placeholder_title);
        if topics.is_empty() {
            return Err(Advisory::NoTopicsFound.into());
        }
        info!("{} topics found", topics.len());
        self.last_topics = topics;
        Ok(self.regenerate())
    }

    /// Change whether titles get their own block, regenerating the cached
    /// track if there is one.
    pub fn set_include_titles(&mut self, include_titles: bool) -> Option<&SessionOutput> {
        self.include_titles = include_titles;
        if self.last_topics.is_empty() {
            None
        } else {
            Some(self.regenerate())
        }
    }

    /// File name for the cached track, derived from the first topic title.
    pub fn srt_filename(&self) -> String {
        let titles: Vec<&str> = self.last_topics.iter().map(|t| t.title.as_str()).collect();
        format!("{}.srt", base_filename_for(&titles))
    }

    /// Write the cached track into `dir`.
    pub fn save_srt<P: AsRef<Path>>(&self, dir: P) -> ScriptHelperResult<PathBuf> {
        let output = match &self.last_output {
            Some(output) if !output.srt.is_empty() => output,
            _ => return Err(Advisory::NoSubtitlesToSave.into()),
        };
        Ok(write_srt_file(dir, &self.srt_filename(), &output.srt)?)
    }

    /// Export `text` as tables through `sink`, returning the file names written.
    pub fn export<T: TableSink + ?Sized>(
        &self,
        text: &str,
        sink: &mut T,
    ) -> ScriptHelperResult<Vec<String>> {
        let items = export_items_from_text(text);
        export_to_sink(sink, &items, self.config.export.rows_per_file)
    }

    fn regenerate(&mut self) -> &SessionOutput {
        let generation = generate_srt(&self.last_topics, self.include_titles, &self.config.timing);
        let output = SessionOutput {
            srt: generation.srt(),
            timestamps: generation.timestamps(),
            generation,
        };
        self.last_output.insert(output)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
