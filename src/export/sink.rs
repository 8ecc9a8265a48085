use crate::errors::ExportError;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Destination for export tables. One call per output file.
#[cfg_attr(test, mockall::automock)]
pub trait TableSink {
    /// File extension used for output names, without the dot
    fn extension(&self) -> String;

    /// Write one table; the first row is the header.
    fn write_table(&mut self, file_name: &str, rows: &[Vec<String>]) -> Result<(), ExportError>;
}

/// Writes each table as a CSV file inside a directory
#[derive(Debug)]
pub struct CsvDirSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl CsvDirSink {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            written: Vec::new(),
        }
    }

    /// Paths of the files written so far
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl TableSink for CsvDirSink {
    fn extension(&self) -> String {
        "csv".to_string()
    }

    fn write_table(&mut self, file_name: &str, rows: &[Vec<String>]) -> Result<(), ExportError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        let write_error =
            |e: csv::Error| ExportError::new(format!("Failed to write {}: {}", path.display(), e));

        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_path(&path)
            .map_err(write_error)?;
        for row in rows {
            writer.write_record(row).map_err(write_error)?;
        }
        writer.flush()?;

        debug!("Wrote {} rows to {}", rows.len(), path.display());
        self.written.push(path);
        Ok(())
    }
}
